//! Parameter catalog - the allow-list of remote desktop file settings.
//!
//! Only parameters named here are copied from a URI into the generated
//! configuration file. Names are stored lower-case and kept sorted so lookups
//! can binary search.
//!
//! The table is versioned data: bump [`CATALOG_VERSION`] whenever entries are
//! added or removed.
//!
//! Version history:
//! - 1: the original 30 connection, display and RemoteApp keys.
//! - 2: adds the redirection, gateway, multi-monitor and reconnection keys
//!   from the published Remote Desktop property list, and normalizes every
//!   name to lower case.

use serde::Serialize;
use strum::{Display, IntoStaticStr};

/// Current version of the parameter table.
pub const CATALOG_VERSION: u32 = 2;

/// Literal type prefix a value is expected to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    #[strum(serialize = "i")]
    Integer,
    #[strum(serialize = "s")]
    String,
}

/// One recognized configuration parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParameterSpec {
    /// Canonical lower-case name, as written to the configuration file.
    pub name: &'static str,
    pub kind: ValueKind,
    /// Accepted values, documentation only.
    pub hint: &'static str,
}

impl ParameterSpec {
    /// Expected literal format, e.g. `i:<0 or 1>`.
    pub fn value_hint(&self) -> String {
        format!("{}:{}", self.kind, self.hint)
    }
}

const fn param(name: &'static str, kind: ValueKind, hint: &'static str) -> ParameterSpec {
    ParameterSpec { name, kind, hint }
}

static PARAMETERS: &[ParameterSpec] = &[
    param("administrative session", ValueKind::Integer, "<0 or 1>"),
    param("allow desktop composition", ValueKind::Integer, "<0 or 1>"),
    param("allow font smoothing", ValueKind::Integer, "<0 or 1>"),
    param("alternate full address", ValueKind::String, "<string>"),
    param("alternate shell", ValueKind::String, "<string>"),
    param("audiocapturemode", ValueKind::Integer, "<0 or 1>"),
    param("audiomode", ValueKind::Integer, "<0, 1, or 2>"),
    param("audioqualitymode", ValueKind::Integer, "<0, 1, or 2>"),
    param("authentication level", ValueKind::Integer, "<0, 1, 2, or 3>"),
    param("autoreconnect max retries", ValueKind::Integer, "<count>"),
    param("autoreconnection enabled", ValueKind::Integer, "<0 or 1>"),
    param("bandwidthautodetect", ValueKind::Integer, "<0 or 1>"),
    param("camerastoredirect", ValueKind::String, "<* or semicolon-separated device list>"),
    param("compression", ValueKind::Integer, "<0 or 1>"),
    param("connect to console", ValueKind::Integer, "<0 or 1>"),
    param("connection type", ValueKind::Integer, "<1 to 7>"),
    param("desktop size id", ValueKind::Integer, "<0 to 4>"),
    param("desktopheight", ValueKind::Integer, "<value in pixels>"),
    param("desktopscalefactor", ValueKind::Integer, "<100 to 500>"),
    param("desktopwidth", ValueKind::Integer, "<value in pixels>"),
    param("devicestoredirect", ValueKind::String, "<* or semicolon-separated device list>"),
    param("disable ctrl+alt+del", ValueKind::Integer, "<0 or 1>"),
    param("disable cursor settings", ValueKind::Integer, "<0 or 1>"),
    param("disable full window drag", ValueKind::Integer, "<0 or 1>"),
    param("disable menu anims", ValueKind::Integer, "<0 or 1>"),
    param("disable themes", ValueKind::Integer, "<0 or 1>"),
    param("disable wallpaper", ValueKind::Integer, "<0 or 1>"),
    param("disableconnectionsharing", ValueKind::Integer, "<0 or 1>"),
    param("displayconnectionbar", ValueKind::Integer, "<0 or 1>"),
    param("domain", ValueKind::String, "<string>"),
    param("drivestoredirect", ValueKind::String, "<* or semicolon-separated drive list>"),
    param("dynamic resolution", ValueKind::Integer, "<0 or 1>"),
    param("enablecredsspsupport", ValueKind::Integer, "<0 or 1>"),
    param("enablerdsaadauth", ValueKind::Integer, "<0 or 1>"),
    param("encode redirected video capture", ValueKind::Integer, "<0 or 1>"),
    param("full address", ValueKind::String, "<string>"),
    param("gatewaycredentialssource", ValueKind::Integer, "<0, 1, 2, 3, or 4>"),
    param("gatewayhostname", ValueKind::String, "<string>"),
    param("gatewayprofileusagemethod", ValueKind::Integer, "<0 or 1>"),
    param("gatewayusagemethod", ValueKind::Integer, "<0, 1, 2, 3, or 4>"),
    param("kdcproxyname", ValueKind::String, "<string>"),
    param("keyboardhook", ValueKind::Integer, "<0, 1, or 2>"),
    param("loadbalanceinfo", ValueKind::String, "<string>"),
    param("maximizetocurrentdisplays", ValueKind::Integer, "<0 or 1>"),
    param("negotiate security layer", ValueKind::Integer, "<0 or 1>"),
    param("networkautodetect", ValueKind::Integer, "<0 or 1>"),
    param("prompt for credentials on client", ValueKind::Integer, "<0 or 1>"),
    param("promptcredentialonce", ValueKind::Integer, "<0 or 1>"),
    param("redirectclipboard", ValueKind::Integer, "<0 or 1>"),
    param("redirectcomports", ValueKind::Integer, "<0 or 1>"),
    param("redirectdirectx", ValueKind::Integer, "<0 or 1>"),
    param("redirectlocation", ValueKind::Integer, "<0 or 1>"),
    param("redirectposdevices", ValueKind::Integer, "<0 or 1>"),
    param("redirectprinters", ValueKind::Integer, "<0 or 1>"),
    param("redirectsmartcards", ValueKind::Integer, "<0 or 1>"),
    param("redirectwebauthn", ValueKind::Integer, "<0 or 1>"),
    param("remoteapplicationcmdline", ValueKind::String, "<string>"),
    param("remoteapplicationexpandcmdline", ValueKind::Integer, "<0 or 1>"),
    param("remoteapplicationexpandworkingdir", ValueKind::Integer, "<0 or 1>"),
    param("remoteapplicationfile", ValueKind::String, "<string>"),
    param("remoteapplicationicon", ValueKind::String, "<string>"),
    param("remoteapplicationmode", ValueKind::Integer, "<0 or 1>"),
    param("remoteapplicationname", ValueKind::String, "<string>"),
    param("remoteapplicationprogram", ValueKind::String, "<string>"),
    param("screen mode id", ValueKind::Integer, "<1 or 2>"),
    param("selectedmonitors", ValueKind::String, "<comma-separated monitor ids>"),
    param("server port", ValueKind::Integer, "<port number>"),
    param("session bpp", ValueKind::Integer, "<8, 15, 16, 24, or 32>"),
    param("shell working directory", ValueKind::String, "<string>"),
    param("singlemoninwindowedmode", ValueKind::Integer, "<0 or 1>"),
    param("smart sizing", ValueKind::Integer, "<0 or 1>"),
    param("targetisaadjoined", ValueKind::Integer, "<0 or 1>"),
    param("usbdevicestoredirect", ValueKind::String, "<* or semicolon-separated device list>"),
    param("use multimon", ValueKind::Integer, "<0 or 1>"),
    param("use redirection server name", ValueKind::Integer, "<0 or 1>"),
    param("username", ValueKind::String, "<string>"),
    param("videoplaybackmode", ValueKind::Integer, "<0 or 1>"),
    param("winposstr", ValueKind::String, "<0,flags,left,top,right,bottom>"),
];

/// All recognized parameters, sorted by name.
pub fn entries() -> &'static [ParameterSpec] {
    PARAMETERS
}

/// Look up a parameter by name, ignoring case.
pub fn lookup(name: &str) -> Option<&'static ParameterSpec> {
    let needle = name.to_lowercase();
    PARAMETERS
        .binary_search_by(|entry| entry.name.cmp(needle.as_str()))
        .ok()
        .map(|index| &PARAMETERS[index])
}

/// Whether `name` is on the allow-list, ignoring case.
pub fn is_recognized(name: &str) -> bool {
    lookup(name).is_some()
}
