//! Own-profile helpers

use crate::client::WahaClient;
use crate::utils::encode_path_segment;

/// Profile facade
pub struct ProfileApi {
    client: WahaClient,
}

impl ProfileApi {
    pub fn new(client: WahaClient) -> Self {
        Self { client }
    }

    /// URL of the session's own profile picture.
    ///
    /// Composed locally from the client's base URL; no request is made.
    pub fn picture_url(&self, session: &str) -> String {
        format!(
            "{}/api/{}/profile/picture",
            self.client.base_url(),
            encode_path_segment(session)
        )
    }
}
