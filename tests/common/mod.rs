use std::fs;
use std::path::Path;

pub const EMPTY_MD5: &str = "d41d8cd98f00b204e9800998ecf8427e";

pub const MARC_RECORD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<record xmlns="http://www.loc.gov/MARC21/slim">
  <leader>01142cam  2200301 a 4500</leader>
  <controlfield tag="001">   92005291 </controlfield>
</record>"#;

pub const ALTO_DOCUMENT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<alto xmlns="http://www.loc.gov/standards/alto/ns-v2#">
  <Layout>
    <Page ID="PG.1" PHYSICAL_IMG_NR="1"/>
  </Layout>
</alto>"#;

/// Lay down a package that passes every check: required files, one component
/// with empty `.txt`/`.jp2` files, a matching checksum manifest and metadata.
pub fn write_complete_package(package: &Path) {
    fs::create_dir_all(package).unwrap();
    fs::write(package.join("00000001.txt"), "").unwrap();
    fs::write(package.join("00000001.jp2"), "").unwrap();
    fs::write(
        package.join("checksum.md5"),
        format!("{EMPTY_MD5} 00000001.txt\n{EMPTY_MD5} 00000001.jp2\n"),
    )
    .unwrap();
    fs::write(package.join("marc.xml"), MARC_RECORD).unwrap();
    fs::write(
        package.join("meta.yml"),
        "capture_date: 2021-01-05T10:31:00-05:00\n\
         capture_agent: IU\n\
         pagedata:\n    00000001.jp2: { label: FRONT_COVER }\n",
    )
    .unwrap();
}
