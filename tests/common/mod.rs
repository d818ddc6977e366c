#![allow(dead_code)]

use paygate::domain::descriptor::GatewayDescriptor;
use paygate::domain::gateway::{Gateway, GatewayRef};
use paygate::infrastructure::constructor_table::ConstructorTable;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;

/// Descriptors seen by the constructors, in call order.
pub type ConstructionLog = Arc<Mutex<Vec<GatewayDescriptor>>>;

#[derive(Debug)]
pub struct PayPalGateway {
    pub id: String,
    pub purse: String,
    pub secret: String,
}

impl Gateway for PayPalGateway {
    fn id(&self) -> &str {
        &self.id
    }

    fn class(&self) -> &str {
        "PayPalGateway"
    }
}

#[derive(Debug)]
pub struct WebMoneyGateway {
    pub id: String,
    pub purse: String,
}

impl Gateway for WebMoneyGateway {
    fn id(&self) -> &str {
        &self.id
    }

    fn class(&self) -> &str {
        "WebMoney"
    }
}

/// Constructor table with `PayPalGateway` and `WebMoney`, recording every call in `log`.
pub fn constructors(log: ConstructionLog) -> ConstructorTable {
    let paypal_log = log.clone();
    ConstructorTable::new()
        .with("PayPalGateway", move |d: &GatewayDescriptor| {
            paypal_log.lock().unwrap().push(d.clone());
            Ok(Arc::new(PayPalGateway {
                id: d.id.clone().unwrap_or_default(),
                purse: d.str_param("purse")?.to_string(),
                secret: d.str_param("secret")?.to_string(),
            }) as GatewayRef)
        })
        .with("WebMoney", move |d: &GatewayDescriptor| {
            log.lock().unwrap().push(d.clone());
            Ok(Arc::new(WebMoneyGateway {
                id: d.id.clone().unwrap_or_default(),
                purse: d.str_param("purse")?.to_string(),
            }) as GatewayRef)
        })
}

pub fn paypal(purse: &str) -> GatewayDescriptor {
    GatewayDescriptor::new("PayPalGateway")
        .with_param("purse", purse)
        .with_param("secret", "s")
}

/// Writes `contents` to a temp file with the given extension.
pub fn config_file(contents: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp config");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp config");
    file
}
