// Dreambox web API HTTP client
//
// Wraps `reqwest::Client` with device URL construction, optional basic
// auth, and XML field interpretation for the five control endpoints.
// Everything is a GET; the box's answers are small XML documents.

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;
use crate::xml::{self, XmlNode};

/// Identity record from `/web/deviceinfo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub name: String,
    pub mac: String,
}

impl DeviceInfo {
    /// Entity id derived from the MAC: `remote-<mac without separators>`.
    pub fn entity_id(&self) -> String {
        let mac: String = self
            .mac
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect();
        format!("remote-{mac}")
    }
}

/// Raw HTTP client for one box's web control API.
///
/// Methods return wire-level results: transport failures, non-200
/// statuses, and rejected commands surface as [`Error`]. Outcome
/// classification (server-error vs ok-with-state) is the caller's
/// concern.
pub struct DreamboxClient {
    http: reqwest::Client,
    base_url: Url,
    username: Option<String>,
    password: Option<SecretString>,
}

impl DreamboxClient {
    /// Create a client with its own `reqwest::Client` built from
    /// `transport`. `address` is the device's `host[:port]`.
    pub fn new(
        address: &str,
        username: Option<String>,
        password: Option<SecretString>,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let base_url = Url::parse(&format!("http://{address}/"))?;
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            username,
            password,
        })
    }

    /// Create a client sharing a pre-built `reqwest::Client`.
    ///
    /// The adapter builds one HTTP client and hands it to every device;
    /// credentials stay per-device and are applied per request.
    pub fn with_client(
        http: reqwest::Client,
        base_url: Url,
        username: Option<String>,
        password: Option<SecretString>,
    ) -> Self {
        Self {
            http,
            base_url,
            username,
            password,
        }
    }

    /// The device base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── Request helpers ──────────────────────────────────────────────

    fn api_url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    /// Send a GET and parse the 200 body as a generic XML tree.
    async fn get_xml(&self, url: Url) -> Result<XmlNode, Error> {
        debug!(%url, "device request");

        let mut request = self.http.get(url);
        if let (Some(username), Some(password)) = (&self.username, &self.password) {
            if !username.is_empty() && !password.expose_secret().is_empty() {
                request = request.basic_auth(username, Some(password.expose_secret()));
            }
        }

        let response = request.send().await.map_err(Error::Transport)?;
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(Error::Status {
                code: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(Error::Transport)?;
        xml::parse(&body)
    }

    // ── Control endpoints ────────────────────────────────────────────

    /// Fetch device name and MAC address.
    ///
    /// `GET /web/deviceinfo`
    pub async fn device_info(&self) -> Result<DeviceInfo, Error> {
        let tree = self.get_xml(self.api_url("web/deviceinfo")?).await?;

        let name = tree.path(&["e2deviceinfo", "e2devicename"])?.to_owned();
        let mac = tree
            .path(&["e2deviceinfo", "e2network", "e2interface", "e2mac"])?
            .to_owned();

        Ok(DeviceInfo { name, mac })
    }

    /// Press a remote key.
    ///
    /// `GET /web/remotecontrol?command=<code>[&type=long]`
    ///
    /// Success requires `e2remotecontrol/e2result` to be exactly
    /// `"True"`; anything else is [`Error::CommandRejected`].
    pub async fn send_key(&self, code: u32, long_press: bool) -> Result<(), Error> {
        let mut url = self.api_url("web/remotecontrol")?;
        url.query_pairs_mut()
            .append_pair("command", &code.to_string());
        if long_press {
            url.query_pairs_mut().append_pair("type", "long");
        }

        let tree = self.get_xml(url).await?;
        match tree.find(&["e2remotecontrol", "e2result"]) {
            Some("True") => Ok(()),
            result => Err(Error::CommandRejected {
                code,
                result: result.map(str::to_owned),
            }),
        }
    }

    /// Switch the box on (`newstate=4`) or into standby (`newstate=5`).
    ///
    /// `GET /web/powerstate?newstate=<4|5>`
    ///
    /// The box does not always report the fresh standby value on
    /// state-change calls, so the response body is deliberately not
    /// checked: any 200 counts as success.
    pub async fn set_power(&self, on: bool) -> Result<(), Error> {
        let mut url = self.api_url("web/powerstate")?;
        url.query_pairs_mut()
            .append_pair("newstate", if on { "4" } else { "5" });

        self.get_xml(url).await?;
        Ok(())
    }

    /// Query standby state. Returns `true` when the box is in standby.
    ///
    /// `GET /web/powerstate`
    ///
    /// Only a `e2powerstate/e2instandby` value of boolean true means
    /// standby; a missing or non-boolean field means running.
    pub async fn power_state(&self) -> Result<bool, Error> {
        let tree = self.get_xml(self.api_url("web/powerstate")?).await?;
        Ok(tree
            .find(&["e2powerstate", "e2instandby"])
            .is_some_and(|value| value.trim().eq_ignore_ascii_case("true")))
    }

    /// Query the audio downmix switch. Returns `true` when enabled.
    ///
    /// `GET /web/downmix`
    pub async fn downmix(&self) -> Result<bool, Error> {
        let tree = self.get_xml(self.api_url("web/downmix")?).await?;
        Ok(downmix_enabled(&tree))
    }

    /// Set the audio downmix switch; returns the state the box reports
    /// back.
    ///
    /// `GET /web/downmix?enable=<True|False>`
    pub async fn set_downmix(&self, enable: bool) -> Result<bool, Error> {
        let mut url = self.api_url("web/downmix")?;
        url.query_pairs_mut()
            .append_pair("enable", if enable { "True" } else { "False" });

        let tree = self.get_xml(url).await?;
        Ok(downmix_enabled(&tree))
    }
}

/// `e2simplexmlresult/e2state` equal to `"True"` means enabled;
/// anything else (including absent) means disabled.
fn downmix_enabled(tree: &XmlNode) -> bool {
    tree.find(&["e2simplexmlresult", "e2state"]) == Some("True")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_strips_mac_separators() {
        let info = DeviceInfo {
            name: "dm920".into(),
            mac: "00:09:34:2A:BC:DE".into(),
        };
        assert_eq!(info.entity_id(), "remote-0009342ABCDE");
    }
}
