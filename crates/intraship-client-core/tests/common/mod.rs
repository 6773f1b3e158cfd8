#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime};
use intraship_client_core::{
    mock::MockTransport, Address, BookingInformation, CarrierClient, ClientConfig, Environment,
    Party, Shipment,
};

pub const EKP: &str = "5000000000";
pub const PARTNER_ID: &str = "07";

pub fn config() -> ClientConfig {
    ClientConfig::builder()
        .user("geschaeftskunden_api")
        .signature("Dhl_ep_test1")
        .ekp(EKP)
        .partner_id(PARTNER_ID)
        .build()
}

pub fn client(transport: MockTransport) -> CarrierClient<MockTransport> {
    CarrierClient::new(config(), Environment::Test, transport).expect("valid test configuration")
}

pub fn address(company: &str) -> Address {
    Address::builder()
        .party(Party::company(company))
        .street("Charles-de-Gaulle-Str.")
        .house_number("20")
        .zip("53113")
        .city("Bonn")
        .email("logistics@example.com")
        .build()
}

pub fn shipment() -> Shipment {
    Shipment::builder()
        .shipment_date(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
        .weight_kg(3.2)
        .sender(address("Sender AG"))
        .receiver(address("Receiver KG"))
        .build()
}

pub fn booking(product: &str) -> BookingInformation {
    BookingInformation::builder()
        .product_id(product)
        .pickup_date(NaiveDate::from_ymd_opt(2026, 10, 20).unwrap())
        .ready_by_time(NaiveTime::from_hms_opt(9, 0, 0).unwrap())
        .closing_time(NaiveTime::from_hms_opt(16, 0, 0).unwrap())
        .build()
}

pub fn created_response(label: &str) -> String {
    format!(
        "<CreateShipmentResponse>\
           <status><StatusCode>0</StatusCode><StatusMessage>ok</StatusMessage></status>\
           <CreationState>\
             <StatusCode>0</StatusCode><StatusMessage>ok</StatusMessage><SequenceNumber>1</SequenceNumber>\
             <ShipmentNumber><shipmentNumber>SHP123</shipmentNumber></ShipmentNumber>\
             {label}\
           </CreationState>\
         </CreateShipmentResponse>"
    )
}

pub fn status_response(element: &str, code: &str, message: &str, detail: &str) -> String {
    format!(
        "<{element}><status><StatusCode>{code}</StatusCode><StatusMessage>{message}</StatusMessage></status>{detail}</{element}>"
    )
}
