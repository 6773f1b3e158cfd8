use intraship_xml::builder::Element;

/// Additional services booked together with a shipment.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Service {
    HigherInsurance {
        amount: f64,
        #[serde(default = "default_currency")]
        currency: String,
    },
    CashOnDelivery {
        amount: f64,
        #[serde(default = "default_currency")]
        currency: String,
    },
    /// Delivery within a time frame, e.g. `"10001200"`.
    DeliveryOnTime { timeframe: String },
    Multipack,
}

fn default_currency() -> String {
    "EUR".to_string()
}

impl Service {
    pub fn to_element(&self) -> Element<'_> {
        let group = match self {
            Self::HigherInsurance { amount, currency } => Element::new("ServiceGroupOther").add_child(
                Element::new("HigherInsurance")
                    .add_child(Element::new("InsuranceAmount").set_text(format!("{amount:.2}")))
                    .add_child(Element::new("InsuranceCurrency").set_text(currency.as_str())),
            ),
            Self::CashOnDelivery { amount, currency } => Element::new("ServiceGroupOther").add_child(
                Element::new("COD")
                    .add_child(Element::new("CODAmount").set_text(format!("{amount:.2}")))
                    .add_child(Element::new("CODCurrency").set_text(currency.as_str())),
            ),
            Self::DeliveryOnTime { timeframe } => Element::new("ServiceGroupDateTimeOption")
                .add_child(
                    Element::new("DeliveryOnTime")
                        .add_child(Element::new("time").set_text(timeframe.as_str())),
                ),
            Self::Multipack => Element::new("ServiceGroupOther")
                .add_child(Element::new("Multipack").set_text("True")),
        };

        Element::new("Service").add_child(group)
    }
}
