//! SMTP delivery of the rendered notification.
//!
//! The relay is fixed: plaintext SMTP to localhost:25, no authentication,
//! no TLS. One session per run: MAIL FROM, one RCPT TO per recipient (all
//! `to` addresses first, then all `cc` addresses), DATA with the rendered
//! payload verbatim, quit. Delivery is all-or-nothing; a failed step is a
//! [`MailError`] and nothing is retried.
//!
//! The transport sits behind the [`MailTransport`] trait so tests can
//! inject a recording mock instead of a live SMTP connection.

use lettre::address::Envelope;
use lettre::{Address, SmtpTransport, Transport};

use crate::error::MailError;

/// The fixed mail relay.
pub const MAIL_HOST: &str = "localhost";
/// Standard SMTP submission port of the local relay.
pub const SMTP_PORT: u16 = 25;

/// Recipient addressing as it arrives from the option set.
///
/// Normalized exactly once into an ordered address list before the
/// envelope is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipients {
    Single(String),
    Multiple(Vec<String>),
    Absent,
}

impl Recipients {
    /// The ordered address list this variant stands for.
    pub fn normalized(&self) -> Vec<&str> {
        match self {
            Recipients::Single(addr) => vec![addr.as_str()],
            Recipients::Multiple(addrs) => addrs.iter().map(String::as_str).collect(),
            Recipients::Absent => Vec::new(),
        }
    }
}

/// Transport seam between envelope composition and the wire.
pub trait MailTransport {
    /// Transmit one message; the payload bytes go into DATA verbatim.
    fn send_raw(&self, envelope: &Envelope, message: &[u8]) -> Result<(), String>;
}

/// Production transport: lettre's blocking SMTP client, plaintext.
pub struct SmtpMailTransport {
    inner: SmtpTransport,
}

impl SmtpMailTransport {
    pub fn new(host: &str, port: u16) -> Self {
        Self {
            inner: SmtpTransport::builder_dangerous(host).port(port).build(),
        }
    }
}

impl MailTransport for SmtpMailTransport {
    fn send_raw(&self, envelope: &Envelope, message: &[u8]) -> Result<(), String> {
        self.inner
            .send_raw(envelope, message)
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

/// Mail dispatcher: builds the envelope and hands the payload to the
/// transport.
pub struct Mailer {
    transport: Box<dyn MailTransport>,
}

impl Mailer {
    /// Dispatcher for the fixed local relay.
    pub fn new() -> Self {
        Self::with_transport(Box::new(SmtpMailTransport::new(MAIL_HOST, SMTP_PORT)))
    }

    pub fn with_transport(transport: Box<dyn MailTransport>) -> Self {
        Self { transport }
    }

    /// Send one message.
    ///
    /// Envelope recipients are all `to` addresses followed by all `cc`
    /// addresses, order preserved. The message string is the complete
    /// payload, header lines included.
    pub fn send(
        &self,
        from: Option<&str>,
        to: &Recipients,
        cc: &Recipients,
        message: &str,
    ) -> Result<(), MailError> {
        let sender = from.ok_or(MailError::MissingSender)?;
        let sender: Address = parse_address(sender)?;

        let mut recipients = Vec::new();
        for addr in to.normalized().into_iter().chain(cc.normalized()) {
            recipients.push(parse_address(addr)?);
        }
        if recipients.is_empty() {
            return Err(MailError::NoRecipients);
        }

        let envelope = Envelope::new(Some(sender), recipients)
            .map_err(|e| MailError::SendFailed(e.to_string()))?;

        self.transport
            .send_raw(&envelope, message.as_bytes())
            .map_err(MailError::SendFailed)
    }
}

impl Default for Mailer {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_address(addr: &str) -> Result<Address, MailError> {
    addr.parse().map_err(|e: lettre::address::AddressError| {
        MailError::InvalidAddress {
            address: addr.to_string(),
            message: e.to_string(),
        }
    })
}

impl std::fmt::Debug for Mailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mailer").finish()
    }
}
