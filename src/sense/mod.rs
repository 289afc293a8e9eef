/*! WordNet 3.1 sense keys

Loading of the `index.sense` reference file ([SenseTable]) and resolution of synset references
(as found in ARASAAC pictogram metadata or in the picto table `synset2` column) into sense keys.

```text
index.sense:
aardvark%1:05:00:: 02065397 1 0
aardwolf%1:05:00:: 02118800 1 0
```
!*/
mod resolve;
mod table;

pub use resolve::{resolve, resolve_first, FormatError, SynsetRef, NO_SYNSET};
pub use table::{LoadError, SenseRecord, SenseTable};

/// What a batch does with a synset reference that can't be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Stop the batch and surface the [FormatError].
    #[default]
    Abort,
    /// Log a warning and act as if the reference had no sense key.
    Skip,
}

impl MalformedPolicy {
    /// Apply the policy to a resolution result.
    pub fn apply<T: Default>(&self, result: Result<T, FormatError>) -> Result<T, FormatError> {
        match (self, result) {
            (_, Ok(v)) => Ok(v),
            (MalformedPolicy::Abort, Err(e)) => Err(e),
            (MalformedPolicy::Skip, Err(e)) => {
                log::warn!("skipping synset reference: {}", e);
                Ok(T::default())
            }
        }
    }
}
