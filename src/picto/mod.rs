/*! ARASAAC pictograms

- [PictoTable]: the local picto table linking lemmas, picto ids and synsets.
- [PictoCatalog]: pictogram metadata and images, served over HTTP by [ArasaacClient].
!*/
mod api;
mod catalog;
mod table;

pub use api::{ArasaacClient, API_URL, STATIC_URL};
pub use catalog::{Keyword, PictoCatalog, Pictogram};
pub use table::{PictoEntry, PictoTable};
