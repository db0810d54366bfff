use super::Error;
use std::{ops::Deref, time::Duration};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const USER_AGENT_NAME: &str = "gitup";

#[derive(Clone, Debug)]
pub struct Client(reqwest::Client);

impl Client {
    pub fn new() -> Result<Client, Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT_NAME)
            .build()
            .map_err(|cause| Error::BuildClientError { cause })?;

        Ok(Client(client))
    }
}

impl Deref for Client {
    type Target = reqwest::Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
