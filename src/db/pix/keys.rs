// Stock of registered PIX keys by participant institution, user nature and
// key type.  Snapshot endpoint: the query takes the first day of the month,
// not a period.

use std::error::Error;
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::db::pix::lib_olinda::{fetch_and_save, FetchOutcome, OLINDA_ROOT};
use crate::db::pix::PixDataset;
use crate::interval::month::Month;

pub struct PixKeysArchive {
    pub base_dir: String,
}

impl PixKeysArchive {
    pub fn download_month(
        &self,
        client: &Client,
        month: &Month,
        pause: Duration,
    ) -> Result<FetchOutcome, Box<dyn Error>> {
        fetch_and_save(
            client,
            &self.url(month),
            Path::new(&self.filename(month)),
            pause,
        )
    }
}

impl PixDataset for PixKeysArchive {
    fn url(&self, month: &Month) -> String {
        format!(
            "{}/ChavesPix(Data=@Data)?@Data='{}'\
             &$top=10000&$format=json\
             &$select=Data,ISPB,Nome,NaturezaUsuario,TipoChave,qt",
            OLINDA_ROOT,
            month.start_date()
        )
    }

    /// The filename keeps the AAAAMM period token even though the query is
    /// by date.
    fn filename(&self, month: &Month) -> String {
        format!("{}/estoque_chaves_{}.csv", self.base_dir, month.yyyymm())
    }
}
