mod common;

use std::{sync::Arc, thread};

use common::*;
use intraship_client_core::{
    mock::MockTransport, CarrierClient, ClientConfig, Environment, IntrashipError, Transport,
};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_missing_credentials_fail_with_configuration_error() {
    let cases = [
        ("", "secret", EKP),
        ("user", "", EKP),
        ("user", "secret", ""),
        ("", "", ""),
    ];

    for (user, signature, ekp) in cases {
        let config = ClientConfig::builder()
            .user(user)
            .signature(signature)
            .ekp(ekp)
            .procedure_id("02")
            .build();

        let result = CarrierClient::new(config, Environment::Production, MockTransport::new());
        assert!(
            matches!(result, Err(IntrashipError::Configuration(_))),
            "{user:?}/{ekp:?} should be rejected"
        );
    }
}

#[test]
fn test_transport_endpoint_must_match_environment() {
    let production = MockTransport::new().with_endpoint(Environment::Production.endpoint_url().unwrap());
    let result = CarrierClient::new(config(), Environment::Test, production);
    match result {
        Err(IntrashipError::Configuration(message)) => {
            assert!(message.contains("http://www.intraship.de/ws/1_0/de/ISService"));
            assert!(message.contains("test-intraship.dhl.com"));
        }
        other => panic!("expected a configuration error, got {other:?}"),
    }

    let test = MockTransport::new().with_endpoint(Environment::Test.endpoint_url().unwrap());
    let client = CarrierClient::new(config(), Environment::Test, test).unwrap();
    assert_eq!(
        client.transport().endpoint().map(url::Url::as_str),
        Some("http://test-intraship.dhl.com/ws/1_0/de/ISService")
    );
}

#[test]
fn test_environment_is_kept() {
    let client = client(MockTransport::new());
    assert_eq!(client.environment(), Environment::Test);
    assert_eq!(client.config().partner_id, PARTNER_ID);
}

#[test]
fn test_client_can_be_shared_between_threads() {
    assert_send_sync::<CarrierClient<MockTransport>>();

    let transport = (0..4).fold(MockTransport::new(), |transport, _| {
        transport.respond_with(&status_response("DoManifestResponse", "0", "ok", ""))
    });
    let client = Arc::new(client(transport));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let client = Arc::clone(&client);
            thread::spawn(move || client.manifest(&format!("0034043383600000000{i}")))
        })
        .collect();

    for handle in handles {
        handle.join().unwrap().unwrap();
    }
    assert_eq!(client.transport().calls().len(), 4);
}
