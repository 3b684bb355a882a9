use anyhow::{Context, Result};
use pharmatc::domain::Drug;
use pharmatc::infrastructure::JsonFileStore;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture for working with a temporary saved-drug store
#[allow(dead_code)]
pub struct TestStore {
    _temp_dir: TempDir,
    pub store_path: PathBuf,
}

#[allow(dead_code)]
impl TestStore {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let store_path = temp_dir.path().join("my_drugs.json");

        Ok(Self {
            _temp_dir: temp_dir,
            store_path,
        })
    }

    /// Pre-populate the store file with records, bypassing the store API
    pub fn seed(&self, drugs: &[Drug]) -> Result<()> {
        let json = serde_json::to_string_pretty(drugs)
            .context("Failed to serialize seed records")?;
        std::fs::write(&self.store_path, json).context("Failed to write seed records")?;
        Ok(())
    }

    /// Open a store over this fixture's file
    pub fn open(&self) -> JsonFileStore {
        JsonFileStore::open(&self.store_path)
    }
}

/// Realistic catalog records from the golden dataset
#[allow(dead_code)]
pub mod sample {
    use pharmatc::domain::Drug;

    // Round coated tablet, 8.0 x 8.0 x 3.4 mm
    pub fn aspirin() -> Drug {
        Drug {
            id: 4321,
            item_seq: 199303108,
            item_name: "아스피린프로텍트정100밀리그람".to_string(),
            entp_seq: "19930001".to_string(),
            entp_name: "바이엘코리아(주)".to_string(),
            item_image: "https://nedrug.mfds.go.kr/pill/4321.jpg".to_string(),
            leng_long: 8.0,
            leng_short: 8.0,
            thick: 3.4,
            edi_code: "653001980".to_string(),
            form_code_name: "장용성필름코팅정".to_string(),
        }
    }

    // Oblong film-coated tablet, 17.2 x 7.1 x 6.2 mm
    pub fn tylenol() -> Drug {
        Drug {
            id: 4503,
            item_seq: 199502217,
            item_name: "타이레놀정500밀리그람".to_string(),
            entp_seq: "19950012".to_string(),
            entp_name: "한국존슨앤드존슨판매(유)".to_string(),
            item_image: "https://nedrug.mfds.go.kr/pill/4503.jpg".to_string(),
            leng_long: 17.2,
            leng_short: 7.1,
            thick: 6.2,
            edi_code: "641901720".to_string(),
            form_code_name: "필름코팅정".to_string(),
        }
    }

    // Sugar-coated round tablet, close to aspirin's dimensions
    pub fn ibuprofen() -> Drug {
        Drug {
            id: 5110,
            item_seq: 198500221,
            item_name: "부루펜정200밀리그램".to_string(),
            entp_seq: "19850003".to_string(),
            entp_name: "삼일제약(주)".to_string(),
            item_image: String::new(),
            leng_long: 8.3,
            leng_short: 8.3,
            thick: 3.6,
            edi_code: "645102220".to_string(),
            form_code_name: "당의정".to_string(),
        }
    }

    /// A record with only id and name, the way very old list entries look
    pub fn bare(id: i64, name: &str) -> Drug {
        Drug {
            id,
            item_name: name.to_string(),
            ..Drug::default()
        }
    }
}
