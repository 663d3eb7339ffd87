// Monthly PIX transaction statistics, broken down by payer/receiver type,
// region, age band, initiation form, nature and purpose.
// https://dadosabertos.bcb.gov.br/dataset/estatisticas-do-pix

use std::error::Error;
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::db::pix::lib_olinda::{fetch_and_save, FetchOutcome, OLINDA_ROOT};
use crate::db::pix::PixDataset;
use crate::interval::month::Month;

pub struct PixStatisticsArchive {
    pub base_dir: String,
}

impl PixStatisticsArchive {
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

impl PixDataset for PixStatisticsArchive {
    /// OData query for one month of statistics.  The projection is applied
    /// server-side through $select.
    fn url(&self, month: &Month) -> String {
        format!(
            "{}/EstatisticasTransacoesPix(Database=@Database)?@Database='{}'\
             &$top=10000&$format=json\
             &$select=AnoMes,PAG_PFPJ,REC_PFPJ,PAG_REGIAO,REC_REGIAO,PAG_IDADE,REC_IDADE,\
             FORMAINICIACAO,NATUREZA,FINALIDADE,VALOR,QUANTIDADE",
            OLINDA_ROOT,
            month.yyyymm()
        )
    }

    fn filename(&self, month: &Month) -> String {
        format!(
            "{}/estatisticas_transacoes_{}.csv",
            self.base_dir,
            month.yyyymm()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::prod_db::ProdDb;

    #[test]
    fn test_url() {
        let archive = ProdDb::pix_statistics();
        let month = Month::new(2023, 4);
        let url = archive.url(&month);
        assert!(url.starts_with(
            "https://olinda.bcb.gov.br/olinda/servico/Pix_DadosAbertos/versao/v1/odata/\
             EstatisticasTransacoesPix(Database=@Database)?"
        ));
        assert!(url.contains("$top=10000"));
        assert!(url.contains("$format=json"));
        assert!(url.contains("$select=AnoMes,"));
        // the fill slot round-trips the period token
        let token = url
            .split("@Database='")
            .nth(1)
            .and_then(|s| s.split('\'').next())
            .unwrap();
        assert_eq!(token, month.yyyymm());
    }

    #[test]
    fn test_filename() {
        let archive = ProdDb::pix_statistics();
        assert_eq!(
            archive.filename(&Month::new(2023, 4)),
            "data/estatisticas_transacoes_202304.csv"
        );
    }

    #[ignore]
    #[test]
    fn download_month() -> Result<(), Box<dyn Error>> {
        let _ = env_logger::builder()
            .filter_level(log::LevelFilter::Info)
            .is_test(true)
            .try_init();
        let archive = ProdDb::pix_statistics();
        let client = crate::db::pix::lib_olinda::client()?;
        let outcome = archive.download_month(&client, &Month::new(2023, 4), Duration::from_millis(250))?;
        assert!(outcome.is_saved());
        Ok(())
    }
}
