//! Listener semantics of a stream server.
//!
//! # Responsibilities
//! - Derive the UDP and passthrough flags from the declared listener
//! - Pick the status zone label
//! - Name the unix socket a passthrough server listens on
//!
//! # Design Decisions
//! - Passthrough servers share one front door, so the host (not the
//!   listener name) is what tells them apart in status output
//! - The listener port is still carried in passthrough mode; the
//!   renderer decides which of socket and port to use

use crate::config::TransportServer;

/// Resolved listener settings for one server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerSettings {
    pub tls_passthrough: bool,
    pub udp: bool,
    pub status_zone: String,
    pub unix_socket: String,
    pub port: u16,
}

impl ListenerSettings {
    pub fn resolve(ts: &TransportServer, listener_port: u16) -> Self {
        let tls_passthrough = ts.is_tls_passthrough();

        let status_zone = if tls_passthrough {
            ts.spec.host.clone()
        } else {
            ts.spec.listener.name.clone()
        };

        Self {
            tls_passthrough,
            udp: ts.spec.listener.protocol == "UDP",
            status_zone,
            unix_socket: unix_socket(ts),
            port: listener_port,
        }
    }
}

/// Socket the passthrough front door forwards this resource's traffic to.
/// Empty for regular listeners.
pub fn unix_socket(ts: &TransportServer) -> String {
    if ts.is_tls_passthrough() {
        format!(
            "unix:/var/lib/nginx/passthrough-{}_{}.sock",
            ts.metadata.namespace, ts.metadata.name
        )
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ResourceKey, TLS_PASSTHROUGH_LISTENER_NAME};

    fn ts(listener: &str, protocol: &str) -> TransportServer {
        let mut ts = TransportServer::default();
        ts.metadata = ResourceKey::new("default", "secure-app");
        ts.spec.listener.name = listener.into();
        ts.spec.listener.protocol = protocol.into();
        ts.spec.host = "app.example.com".into();
        ts
    }

    #[test]
    fn test_tcp_listener() {
        let settings = ListenerSettings::resolve(&ts("tcp-ip", "TCP"), 5353);
        assert_eq!(
            settings,
            ListenerSettings {
                tls_passthrough: false,
                udp: false,
                status_zone: "tcp-ip".into(),
                unix_socket: String::new(),
                port: 5353,
            }
        );
    }

    #[test]
    fn test_udp_listener() {
        assert!(ListenerSettings::resolve(&ts("dns-udp", "UDP"), 53).udp);
        assert!(!ListenerSettings::resolve(&ts("dns-udp", "udp"), 53).udp);
    }

    #[test]
    fn test_passthrough_listener() {
        let settings = ListenerSettings::resolve(&ts(TLS_PASSTHROUGH_LISTENER_NAME, "TLS_PASSTHROUGH"), 2);
        assert!(settings.tls_passthrough);
        assert_eq!(settings.status_zone, "app.example.com");
        assert_eq!(settings.unix_socket, "unix:/var/lib/nginx/passthrough-default_secure-app.sock");
        assert_eq!(settings.port, 2);
    }
}
