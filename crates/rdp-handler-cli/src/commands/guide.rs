//! Getting-started guidance shown when no URI is given.

use rdp_handler::config::guide;

use crate::notify::Notifier;

/// Build the guidance text.
pub fn text() -> String {
    format!(
        "rdp-handler launches Remote Desktop sessions from rdp:// links.\n\
         \n\
         An rdp:// link has this format:\n  {}\n\
         Use %20 for spaces in parameter names and values.\n\
         \n\
         To test, open this link (for example from Win + R):\n  {}\n\
         Replace \"localhost\" with your actual PC name or IP to test properly.\n\
         \n\
         Run `rdp-handler catalog` to list the supported parameters.",
        guide::FORMAT_TEMPLATE,
        guide::SAMPLE_URI
    )
}

pub fn show(notifier: Notifier) {
    notifier.info(&text());
}
