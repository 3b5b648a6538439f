use url::Url;

use crate::api::client::PrioritizerClient;
use crate::config::Settings;
use crate::error::{AppError, AppResult};
use crate::output::Output;

#[derive(Debug)]
pub struct AppContext {
    pub verbose: u8,
    pub settings: Settings,
    pub client: PrioritizerClient,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(api_url: Option<String>, json: bool, verbose: u8) -> AppResult<Self> {
        let settings = Settings::resolve(api_url.as_deref());
        Url::parse(&settings.api_url).map_err(|err| {
            AppError::Config(format!("invalid api url `{}`: {err}", settings.api_url))
        })?;

        let client = PrioritizerClient::new(settings.api_url.clone());
        let output = Output::new(json);

        Ok(Self {
            verbose,
            settings,
            client,
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_rejects_unparseable_api_url() {
        match AppContext::bootstrap(Some("not a url".to_string()), false, 0) {
            Err(AppError::Config(message)) => assert!(message.contains("invalid api url")),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn bootstrap_accepts_flag_url() {
        let ctx = AppContext::bootstrap(Some("http://staging:8000".to_string()), true, 1)
            .expect("bootstrap should work");
        assert_eq!(ctx.settings.api_url, "http://staging:8000");
        assert_eq!(ctx.verbose, 1);
    }
}
