//! Self-signed TLS material and an HTTPS variant of [`send`](super::send).

use std::fs;
use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::sync::Arc;
use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use rcgen::CertifiedKey;
use rustls::pki_types::{CertificateDer, ServerName};
use rustls::{ClientConfig, ClientConnection, RootCertStore, StreamOwned};

use super::client::{HttpReply, parse, request_head};

/// Certificate and PKCS#8 key generated for `localhost`.
pub struct SelfSigned {
    pub certificate_pem: String,
    pub private_key_pem: String,
    certificate_der: CertificateDer<'static>,
}

impl SelfSigned {
    pub fn localhost() -> Self {
        let CertifiedKey { cert, key_pair } =
            rcgen::generate_simple_self_signed(vec!["localhost".to_owned()])
                .expect("generate self-signed certificate");
        Self {
            certificate_pem: cert.pem(),
            private_key_pem: key_pair.serialize_pem(),
            certificate_der: cert.der().clone(),
        }
    }

    /// Writes both PEM files into `dir` and returns their paths.
    pub fn write_to(&self, dir: &Utf8Path) -> (Utf8PathBuf, Utf8PathBuf) {
        let certificate = dir.join("cert.pem");
        let private_key = dir.join("key.pem");
        fs::write(&certificate, &self.certificate_pem).expect("write certificate");
        fs::write(&private_key, &self.private_key_pem).expect("write private key");
        (certificate, private_key)
    }

    /// Client configuration trusting only this certificate.
    fn client_config(&self) -> Arc<ClientConfig> {
        // Another test may have installed the provider already.
        let _ = rustls::crypto::ring::default_provider().install_default();
        let mut roots = RootCertStore::empty();
        roots
            .add(self.certificate_der.clone())
            .expect("trust self-signed certificate");
        Arc::new(
            ClientConfig::builder()
                .with_root_certificates(roots)
                .with_no_client_auth(),
        )
    }
}

/// Sends one request over TLS, verifying the server against `trust`.
pub fn send_tls(
    addr: SocketAddr,
    trust: &SelfSigned,
    method: &str,
    path: &str,
    authorization: Option<&str>,
    body: &[u8],
) -> HttpReply {
    let server_name = ServerName::try_from("localhost").expect("server name");
    let connection =
        ClientConnection::new(trust.client_config(), server_name).expect("client connection");
    let socket = TcpStream::connect(addr).expect("connect to gateway");
    socket
        .set_read_timeout(Some(Duration::from_secs(5)))
        .expect("set read timeout");
    let mut stream = StreamOwned::new(connection, socket);

    let head = request_head(addr, method, path, authorization, body.len());
    stream.write_all(head.as_bytes()).expect("write request head");
    stream.write_all(body).expect("write request body");
    stream.flush().expect("flush request");

    let mut raw = Vec::new();
    match stream.read_to_end(&mut raw) {
        Ok(_) => {}
        // The listener may close the socket without a close_notify alert.
        Err(error) if error.kind() == io::ErrorKind::UnexpectedEof => {}
        Err(error) => panic!("read TLS response: {error}"),
    }
    parse(&raw)
}
