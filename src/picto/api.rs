//! ARASAAC HTTP API client.
//!
//! Requests are blocking and sequential, without retry.
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use reqwest::blocking::{Client, Response};
use reqwest::header::ACCEPT;
use url::Url;

use super::catalog::{PictoCatalog, Pictogram};
use crate::error::Error;

pub const API_URL: &str = "https://api.arasaac.org/api";
pub const STATIC_URL: &str = "https://static.arasaac.org";

/// Holds endpoints, catalog language and the http client that will make the requests.
pub struct ArasaacClient {
    api_url: Url,
    static_url: Url,
    lang: String,
    client: Client,
}

impl ArasaacClient {
    pub fn new(api_url: Url, static_url: Url, lang: &str) -> Self {
        Self {
            api_url,
            static_url,
            lang: lang.to_string(),
            client: Client::new(),
        }
    }

    /// Append `segments` to `base`. Segments are percent-encoded.
    fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, Error> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Custom(format!("{} cannot be a base url", base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// `<api>/pictograms/<lang>/<id>`
    pub fn pictogram_url(&self, id: u64) -> Result<Url, Error> {
        Self::endpoint(
            &self.api_url,
            &["pictograms", &self.lang, &id.to_string()],
        )
    }

    /// `<api>/pictograms/<lang>/search/<word>`
    pub fn search_url(&self, word: &str) -> Result<Url, Error> {
        Self::endpoint(&self.api_url, &["pictograms", &self.lang, "search", word])
    }

    /// `<api>/pictograms/all/<lang>`
    pub fn all_url(&self) -> Result<Url, Error> {
        Self::endpoint(&self.api_url, &["pictograms", "all", &self.lang])
    }

    /// `<static>/pictograms/<id>/<id>_2500.png`
    pub fn image_url(&self, id: u64) -> Result<Url, Error> {
        let id = id.to_string();
        Self::endpoint(
            &self.static_url,
            &["pictograms", &id, &format!("{}_2500.png", id)],
        )
    }

    fn get_json(&self, url: Url) -> Result<Response, Error> {
        debug!("GET {}", url);
        let resp = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()?;
        Ok(resp)
    }
}

impl PictoCatalog for ArasaacClient {
    fn pictogram_json(&self, id: u64) -> Result<String, Error> {
        Ok(self
            .get_json(self.pictogram_url(id)?)?
            .error_for_status()?
            .text()?)
    }

    fn search(&self, word: &str) -> Result<Vec<Pictogram>, Error> {
        let resp = self.get_json(self.search_url(word)?)?;
        // unknown words answer 404
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&resp.error_for_status()?.text()?)?)
    }

    fn all_json(&self) -> Result<String, Error> {
        Ok(self.get_json(self.all_url()?)?.error_for_status()?.text()?)
    }

    fn download_image(&self, id: u64, dst: &Path) -> Result<(), Error> {
        let url = self.image_url(id)?;
        debug!("downloading {} to {:?}", url, dst);
        let response = self.client.get(url).send()?.error_for_status()?;
        let mut out = File::create(dst)?;
        let mut buf = BufReader::new(response);
        std::io::copy(&mut buf, &mut out)?;
        Ok(())
    }
}
