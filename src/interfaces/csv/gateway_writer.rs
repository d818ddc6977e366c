use crate::domain::gateway::GatewayRef;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct GatewayRow<'a> {
    id: &'a str,
    class: &'a str,
}

/// Writes a summary of resolved gateways as CSV.
///
/// Only the registry id and the type tag are written. Construction parameters, which
/// may carry credentials, never reach the output.
pub struct GatewayWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> GatewayWriter<W> {
    /// Creates a new `GatewayWriter` over any `Write` sink (e.g., Stdout, File).
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Writes one row per `(id, gateway)` pair, in iteration order, then flushes.
    pub fn write_gateways<'a, I>(&mut self, gateways: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a String, &'a GatewayRef)>,
    {
        let mut wrote_any = false;
        for (id, gateway) in gateways {
            self.writer.serialize(GatewayRow {
                id,
                class: gateway.class(),
            })?;
            wrote_any = true;
        }
        if !wrote_any {
            self.writer.write_record(["id", "class"])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
