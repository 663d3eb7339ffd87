// Monthly PIX transaction values and counts aggregated by municipality,
// with payer/receiver splits for natural and legal persons.

use std::error::Error;
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::db::pix::lib_olinda::{fetch_and_save, FetchOutcome, OLINDA_ROOT};
use crate::db::pix::PixDataset;
use crate::interval::month::Month;

pub struct PixMunicipalityArchive {
    pub base_dir: String,
}

impl PixMunicipalityArchive {
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

impl PixDataset for PixMunicipalityArchive {
    fn url(&self, month: &Month) -> String {
        format!(
            "{}/TransacoesPixPorMunicipio(DataBase=@DataBase)?@DataBase='{}'\
             &$top=10000&$format=json\
             &$select=AnoMes,Municipio_Ibge,Municipio,Estado_Ibge,Estado,Sigla_Regiao,Regiao,\
             VL_PagadorPF,QT_PagadorPF,VL_PagadorPJ,QT_PagadorPJ,\
             VL_RecebedorPF,QT_RecebedorPF,VL_RecebedorPJ,QT_RecebedorPJ,\
             QT_PES_PagadorPF,QT_PES_PagadorPJ,QT_PES_RecebedorPF,QT_PES_RecebedorPJ",
            OLINDA_ROOT,
            month.yyyymm()
        )
    }

    fn filename(&self, month: &Month) -> String {
        format!(
            "{}/transacoes_municipio_{}.csv",
            self.base_dir,
            month.yyyymm()
        )
    }
}
