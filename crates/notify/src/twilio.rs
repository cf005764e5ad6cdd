//! SMS delivery through the Twilio REST API (no SDK dependency).

use std::time::Duration;

use reqwest::blocking::Client;

use takeaway_ordering::{DeliveryError, NotificationChannel};

pub const DEFAULT_BASE_URL: &str = "https://api.twilio.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Account credentials and sender number for the SMS gateway.
#[derive(Clone, PartialEq, Eq)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub from_number: String,
    pub base_url: String,
}

impl TwilioConfig {
    /// Read `TWILIO_ACCOUNT_SID`, `TWILIO_AUTH_TOKEN`, `TWILIO_FROM_NUMBER`
    /// and optionally `TWILIO_BASE_URL` from the process environment.
    pub fn from_env() -> Result<Self, DeliveryError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DeliveryError> {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| DeliveryError::Configuration(format!("{key} is not set")))
        };

        Ok(Self {
            account_sid: required("TWILIO_ACCOUNT_SID")?,
            auth_token: required("TWILIO_AUTH_TOKEN")?,
            from_number: required("TWILIO_FROM_NUMBER")?,
            base_url: lookup("TWILIO_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.base_url.trim_end_matches('/'),
            self.account_sid
        )
    }
}

impl core::fmt::Debug for TwilioConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TwilioConfig")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"<redacted>")
            .field("from_number", &self.from_number)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Sends each message as one SMS. Failures are reported, never retried.
pub struct TwilioSmsChannel {
    client: Client,
    config: TwilioConfig,
}

impl TwilioSmsChannel {
    pub fn new(config: TwilioConfig) -> Result<Self, DeliveryError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| DeliveryError::Configuration(format!("http client: {e}")))?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: TwilioConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &TwilioConfig {
        &self.config
    }
}

impl NotificationChannel for TwilioSmsChannel {
    fn send_message(&self, destination: &str, text: &str) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(self.config.messages_url())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&[
                ("To", destination),
                ("From", self.config.from_number.as_str()),
                ("Body", text),
            ])
            .send()
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(destination, status = status.as_u16(), "sms accepted by gateway");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    fn local_channel(base_url: &str) -> TwilioSmsChannel {
        let client = Client::builder().no_proxy().build().unwrap();
        TwilioSmsChannel::with_client(client, config(base_url))
    }

    fn config(base_url: &str) -> TwilioConfig {
        TwilioConfig {
            account_sid: "AC123".to_string(),
            auth_token: "secret".to_string(),
            from_number: "+15005550006".to_string(),
            base_url: base_url.to_string(),
        }
    }

    /// Serve one HTTP request with `status_line` and `body`, returning what was received.
    fn serve_once(status_line: &'static str, body: &'static str) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut received = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                received.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&received);
                if let Some(header_end) = text.find("\r\n\r\n") {
                    let content_length = text[..header_end]
                        .lines()
                        .find_map(|l| {
                            let (name, value) = l.split_once(':')?;
                            name.eq_ignore_ascii_case("content-length")
                                .then(|| value.trim().parse::<usize>().ok())
                                .flatten()
                        })
                        .unwrap_or(0);
                    if received.len() >= header_end + 4 + content_length {
                        break;
                    }
                }
            }
            let response = format!(
                "{status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
            String::from_utf8_lossy(&received).into_owned()
        });
        (format!("http://{addr}"), handle)
    }

    #[test]
    fn config_reads_required_variables() {
        let cfg = TwilioConfig::from_lookup(lookup(&[
            ("TWILIO_ACCOUNT_SID", "AC123"),
            ("TWILIO_AUTH_TOKEN", "secret"),
            ("TWILIO_FROM_NUMBER", "+15005550006"),
        ]))
        .unwrap();
        assert_eq!(cfg, config(DEFAULT_BASE_URL));
    }

    #[test]
    fn missing_variable_is_a_configuration_error() {
        let err = TwilioConfig::from_lookup(lookup(&[
            ("TWILIO_ACCOUNT_SID", "AC123"),
            ("TWILIO_AUTH_TOKEN", " "),
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            DeliveryError::Configuration("TWILIO_AUTH_TOKEN is not set".to_string())
        );
    }

    #[test]
    fn debug_output_hides_the_token() {
        let rendered = format!("{:?}", config(DEFAULT_BASE_URL));
        assert!(!rendered.contains("secret"));
    }

    #[test]
    fn messages_url_uses_account_sid() {
        assert_eq!(
            config("https://example.test/").messages_url(),
            "https://example.test/2010-04-01/Accounts/AC123/Messages.json"
        );
    }

    #[test]
    fn posts_form_encoded_message() {
        let (base_url, server) = serve_once("HTTP/1.1 201 Created", "{}");
        let channel = local_channel(&base_url);

        channel.send_message("+4400", "Thank you!").unwrap();

        let request = server.join().unwrap();
        assert!(request.starts_with("POST /2010-04-01/Accounts/AC123/Messages.json"));
        assert!(request.to_ascii_lowercase().contains("authorization: basic "));
        assert!(request.contains("To=%2B4400"));
        assert!(request.contains("From=%2B15005550006"));
        assert!(request.contains("Body=Thank+you%21"));
    }

    #[test]
    fn non_success_status_is_rejected() {
        let (base_url, server) = serve_once("HTTP/1.1 400 Bad Request", "invalid number");
        let channel = local_channel(&base_url);

        let err = channel.send_message("+4400", "hi").unwrap_err();
        server.join().unwrap();
        assert_eq!(
            err,
            DeliveryError::Rejected {
                status: 400,
                body: "invalid number".to_string()
            }
        );
    }

    #[test]
    fn unreachable_gateway_is_a_transport_error() {
        let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
        let channel = local_channel(&format!("http://{addr}"));
        let err = channel.send_message("+4400", "hi").unwrap_err();
        assert!(matches!(err, DeliveryError::Transport(_)));
    }
}
