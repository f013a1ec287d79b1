//! Local port probing for the visual test server.

use std::net::{Ipv4Addr, TcpListener};

use crate::error::BaselineError;

/// Probe up to `span` consecutive ports starting at `start` and return the
/// first one that accepts a loopback bind. Candidates past the port ceiling
/// are not probed, so the highest port itself stays reachable. The probe
/// listener is dropped before returning, so the port is free, not reserved.
///
/// # Errors
///
/// Returns [`BaselineError::NoFreePort`] when every probed port is taken.
pub fn find_free_port(start: u16, span: u16) -> Result<u16, BaselineError> {
    for offset in 0..span {
        let Some(port) = start.checked_add(offset) else {
            break;
        };
        if TcpListener::bind((Ipv4Addr::LOCALHOST, port)).is_ok() {
            tracing::debug!(port, "found free port");
            return Ok(port);
        }
    }
    Err(BaselineError::NoFreePort)
}
