use crate::db::pix::{
    keys::PixKeysArchive, municipalities::PixMunicipalityArchive,
    statistics::PixStatisticsArchive,
};

pub struct ProdDb {}

impl ProdDb {
    pub fn pix_statistics() -> PixStatisticsArchive {
        PixStatisticsArchive {
            base_dir: "data".to_string(),
        }
    }

    pub fn pix_keys() -> PixKeysArchive {
        PixKeysArchive {
            base_dir: "data".to_string(),
        }
    }

    pub fn pix_municipalities() -> PixMunicipalityArchive {
        PixMunicipalityArchive {
            base_dir: "data".to_string(),
        }
    }
}
