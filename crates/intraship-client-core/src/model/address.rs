use intraship_xml::builder::Element;

use super::{optional_cis, optional_text};
use crate::request::cis;

/// Who lives at an [`Address`]: a company or a private person.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Party {
    Company {
        name1: String,
        name2: Option<String>,
    },
    Person {
        salutation: Option<String>,
        firstname: String,
        lastname: String,
    },
}

impl Party {
    pub fn company(name: impl Into<String>) -> Self {
        Self::Company {
            name1: name.into(),
            name2: None,
        }
    }

    pub fn person(firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self::Person {
            salutation: None,
            firstname: firstname.into(),
            lastname: lastname.into(),
        }
    }

    fn to_element(&self) -> Element<'_> {
        let party = match self {
            Self::Company { name1, name2 } => cis("Company")
                .add_child(cis("name1").set_text(name1.as_str()))
                .add_child_optional(optional_cis("name2", name2.as_deref())),
            Self::Person {
                salutation,
                firstname,
                lastname,
            } => cis("Person")
                .add_child_optional(optional_cis("salutation", salutation.as_deref()))
                .add_child(cis("firstname").set_text(firstname.as_str()))
                .add_child(cis("lastname").set_text(lastname.as_str())),
        };

        // The wrapper is called `Company` for people as well.
        Element::new("Company").add_child(party)
    }
}

/// A postal address plus contact details of a shipment or pickup party.
#[derive(Debug, Clone, PartialEq, Eq, typed_builder::TypedBuilder, serde::Deserialize)]
pub struct Address {
    pub party: Party,
    #[builder(setter(into))]
    pub street: String,
    #[builder(setter(into))]
    pub house_number: String,
    /// Rendered as `careOfName`.
    #[builder(default, setter(into, strip_option))]
    pub street_additional: Option<String>,
    #[builder(setter(into))]
    pub zip: String,
    #[builder(setter(into))]
    pub city: String,
    /// ISO 3166 alpha-2 country code.
    #[builder(default = default_country_code(), setter(into))]
    #[serde(default = "default_country_code")]
    pub country_code: String,
    #[builder(default, setter(into, strip_option))]
    pub contact_person: Option<String>,
    #[builder(default, setter(into, strip_option))]
    pub email: Option<String>,
    #[builder(default, setter(into, strip_option))]
    pub phone: Option<String>,
}

fn default_country_code() -> String {
    "DE".to_string()
}

impl Address {
    /// The `Company`, `Address` and `Communication` elements, in that order.
    ///
    /// The caller decides which wrapper (`Shipper`, `Receiver`,
    /// `PickupAddress`, ...) they end up in.
    pub fn to_elements(&self) -> Vec<Element<'_>> {
        vec![
            self.party.to_element(),
            self.address_element(),
            self.communication_element(),
        ]
    }

    fn address_element(&self) -> Element<'_> {
        Element::new("Address")
            .add_child(cis("streetName").set_text(self.street.as_str()))
            .add_child(cis("streetNumber").set_text(self.house_number.as_str()))
            .add_child_optional(optional_cis(
                "careOfName",
                self.street_additional.as_deref(),
            ))
            .add_child(cis("Zip").add_child(cis(self.zip_kind()).set_text(self.zip.as_str())))
            .add_child(cis("city").set_text(self.city.as_str()))
            .add_child(
                cis("Origin").add_child(cis("countryISOCode").set_text(self.country_code.as_str())),
            )
    }

    fn communication_element(&self) -> Element<'_> {
        Element::new("Communication")
            .add_child_optional(optional_text(cis("phone"), self.phone.as_deref()))
            .add_child_optional(optional_text(cis("email"), self.email.as_deref()))
            .add_child_optional(optional_text(
                cis("contactPerson"),
                self.contact_person.as_deref(),
            ))
    }

    fn zip_kind(&self) -> &'static str {
        if self.country_code.eq_ignore_ascii_case("DE") {
            "germany"
        } else if self.country_code.eq_ignore_ascii_case("GB") {
            "england"
        } else {
            "other"
        }
    }
}
