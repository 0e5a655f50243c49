//! Chat Response handling
//!
//! Every line the server writes to a client, other than relayed chat bodies.

pub const INVALID_MESSAGE: &str = "ERROR: Invalid Message Provided\n";
pub const MAX_STRIKES_REACHED: &str = "You reached the max strike count. Disconnecting...\n";
pub const SET_NAME_USAGE: &str = "Usage: /username <name>\n";

/// Greeting listing the command literals
pub fn commands_available(literals: &[&str]) -> String {
    format!("Commands available: [{}]\n", literals.join(" "))
}

pub fn banned(remaining_secs: u64) -> String {
    format!("You are banned for {} seconds\n", remaining_secs)
}

pub fn rate_limited(strike_count: u32) -> String {
    format!(
        "You are sending messages too fast. Strike Count : {}\n",
        strike_count
    )
}

pub fn client_disconnected(display_name: &str) -> String {
    format!("Client {} Disconnected\n", display_name)
}

pub fn name_set(display_name: &str) -> String {
    format!("Username set to {}\n", display_name)
}

pub fn users(identities: &[&str]) -> String {
    format!("Users: [{}]\n", identities.join(" "))
}
