use intraship_xml::builder::{Builder, Declaration, Element};

const SOAP: &str = "http://schemas.xmlsoap.org/soap/envelope/";
const CIS: &str = "http://dhl.de/webservice/cisbase";

#[test]
fn test_built_document_resolves_namespaces_when_parsed() {
    let envelope = Element::new("Envelope")
        .set_namespace(SOAP)
        .add_namespace_declaration(SOAP, Some("soapenv"))
        .add_namespace_declaration(CIS, Some("cis"))
        .add_child(
            Element::new("Body").set_namespace(SOAP).add_child(
                Element::new("ShipmentNumber")
                    .add_child(Element::new("shipmentNumber").set_namespace(CIS).set_text("SHP 1 & 2")),
            ),
        );

    let xml = Builder::new(Some(Declaration::new("1.0", "UTF-8")), envelope)
        .to_xml_string()
        .expect("envelope should serialize");

    let root = intraship_xml::parser::parse(&xml).expect("serialized envelope should parse");
    assert_eq!(root.namespace(), Some(SOAP));

    let number = root
        .find(&["Body", "ShipmentNumber", "shipmentNumber"])
        .expect("shipment number should be present");
    assert_eq!(number.namespace(), Some(CIS));
    assert_eq!(number.text(), Some("SHP 1 & 2"));
}
