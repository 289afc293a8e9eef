/*! UFSAC corpus writer

```xml
<corpus>
   <document id="doc1">
      <paragraph>
         <sentence id="doc1.s0">
            <word surface_form="chat" lemma="chat" pos="NOUN" wn30_key="chat%1:05:00::" id="doc1.s0.t1" />
```
!*/
use std::io::Write;

use xml::writer::{EmitterConfig, EventWriter, XmlEvent};

use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Word {
    pub surface_form: String,
    pub lemma: String,
    pub pos: String,
    /// `;` separated sense keys.
    pub wn30_key: Option<String>,
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sentence {
    pub id: String,
    pub words: Vec<Word>,
}

/// A document holds a single paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub id: String,
    pub sentences: Vec<Sentence>,
}

/// Write `documents` as an indented UFSAC corpus.
pub fn write_corpus<W: Write>(documents: &[Document], out: W) -> Result<(), Error> {
    let mut writer = EmitterConfig::new()
        .perform_indent(true)
        .indent_string("   ")
        .create_writer(out);

    writer.write(XmlEvent::start_element("corpus"))?;
    for doc in documents {
        write_document(&mut writer, doc)?;
    }
    writer.write(XmlEvent::end_element())?;
    Ok(())
}

fn write_document<W: Write>(writer: &mut EventWriter<W>, doc: &Document) -> Result<(), Error> {
    writer.write(XmlEvent::start_element("document").attr("id", &doc.id))?;
    writer.write(XmlEvent::start_element("paragraph"))?;
    for sentence in &doc.sentences {
        writer.write(XmlEvent::start_element("sentence").attr("id", &sentence.id))?;
        for word in &sentence.words {
            let mut element = XmlEvent::start_element("word")
                .attr("surface_form", &word.surface_form)
                .attr("lemma", &word.lemma)
                .attr("pos", &word.pos);
            if let Some(key) = &word.wn30_key {
                element = element.attr("wn30_key", key);
            }
            if let Some(id) = &word.id {
                element = element.attr("id", id);
            }
            writer.write(element)?;
            writer.write(XmlEvent::end_element())?;
        }
        writer.write(XmlEvent::end_element())?;
    }
    writer.write(XmlEvent::end_element())?;
    writer.write(XmlEvent::end_element())?;
    Ok(())
}
