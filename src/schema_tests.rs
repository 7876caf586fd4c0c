use super::*;

const MARC_RECORD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<record xmlns="http://www.loc.gov/MARC21/slim">
  <leader>01142cam  2200301 a 4500</leader>
  <controlfield tag="001">   92005291 </controlfield>
  <datafield tag="245" ind1="1" ind2="0">
    <subfield code="a">Arithmetic /</subfield>
  </datafield>
</record>"#;

const ALTO_DOCUMENT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<alto xmlns="http://www.loc.gov/standards/alto/ns-v2#">
  <Layout>
    <Page ID="PG.1" PHYSICAL_IMG_NR="1">
      <PrintSpace>
        <TextBlock ID="TB.1">
          <TextLine><String CONTENT="hello"/></TextLine>
        </TextBlock>
      </PrintSpace>
    </Page>
  </Layout>
</alto>"#;

#[test]
fn marc_schema_loads() {
    let schema = XmlSchema::load(Scheme::Marc).unwrap();
    assert_eq!(
        schema.target_namespace.as_deref(),
        Some("http://www.loc.gov/MARC21/slim")
    );
    assert!(schema.root_elements.contains("record"));
    assert!(schema.root_elements.contains("collection"));
}

#[test]
fn alto_schema_loads() {
    let schema = XmlSchema::load(Scheme::Alto).unwrap();
    assert_eq!(
        schema.target_namespace.as_deref(),
        Some("http://www.loc.gov/standards/alto/ns-v2#")
    );
    assert!(schema.root_elements.contains("alto"));
}

#[test]
fn marc_record_validates_against_marc() {
    let schema = XmlSchema::load(Scheme::Marc).unwrap();
    let document = roxmltree::Document::parse(MARC_RECORD).unwrap();
    assert!(schema.validate(&document));
}

#[test]
fn collection_root_validates_against_marc() {
    let schema = XmlSchema::load(Scheme::Marc).unwrap();
    let text = r#"<collection xmlns="http://www.loc.gov/MARC21/slim"/>"#;
    let document = roxmltree::Document::parse(text).unwrap();
    assert!(schema.validate(&document));
}

#[test]
fn alto_document_validates_against_alto() {
    let schema = XmlSchema::load(Scheme::Alto).unwrap();
    let document = roxmltree::Document::parse(ALTO_DOCUMENT).unwrap();
    assert!(schema.validate(&document));
}

#[test]
fn marc_record_does_not_validate_against_alto() {
    let schema = XmlSchema::load(Scheme::Alto).unwrap();
    let document = roxmltree::Document::parse(MARC_RECORD).unwrap();
    assert!(!schema.validate(&document));
}

#[test]
fn unqualified_document_does_not_validate() {
    let schema = XmlSchema::load(Scheme::Marc).unwrap();
    let document = roxmltree::Document::parse("<record/>").unwrap();
    assert!(!schema.validate(&document));
}

#[test]
fn wrong_root_element_does_not_validate() {
    let schema = XmlSchema::load(Scheme::Marc).unwrap();
    let text = r#"<leader xmlns="http://www.loc.gov/MARC21/slim"/>"#;
    let document = roxmltree::Document::parse(text).unwrap();
    assert!(!schema.validate(&document));
}

#[test]
fn foreign_descendant_namespace_does_not_validate() {
    let schema = XmlSchema::load(Scheme::Marc).unwrap();
    let text = r#"<record xmlns="http://www.loc.gov/MARC21/slim">
        <stray xmlns="http://example.com/other"/>
    </record>"#;
    let document = roxmltree::Document::parse(text).unwrap();
    assert!(!schema.validate(&document));
}

#[test]
fn scheme_names_are_stable() {
    assert_eq!(Scheme::Marc.name(), "MARC21slim");
    assert_eq!(Scheme::Alto.name(), "alto");
}
