use ecow::EcoString;
use indexmap::IndexMap;

use super::{HtmlWriteResult, HtmlWriter};

/// Outcome of validating an element before it is written.
pub(crate) enum GuardedHtmlElement<'a> {
    Render(GuardedTagWriter<'a>),
    Textualize,
}

/// An open start tag whose name has been validated.
pub(crate) struct GuardedTagWriter<'a> {
    writer: &'a mut HtmlWriter,
    tag_name: EcoString,
}

impl<'a> GuardedTagWriter<'a> {
    pub(crate) fn new(writer: &'a mut HtmlWriter, tag_name: EcoString) -> Self {
        Self { writer, tag_name }
    }

    /// Writes already validated properties.
    pub(crate) fn write_properties(
        &mut self,
        properties: &IndexMap<EcoString, EcoString>,
    ) -> HtmlWriteResult<()> {
        for (name, value) in properties {
            self.writer.attribute(name, value)?;
        }
        Ok(())
    }

    pub(crate) fn finish(self) -> HtmlWriteResult<GuardedTagBody<'a>> {
        self.writer.finish_tag()?;
        Ok(GuardedTagBody {
            writer: self.writer,
            tag_name: self.tag_name,
        })
    }

    pub(crate) fn finish_void(self) -> HtmlWriteResult<&'a mut HtmlWriter> {
        self.writer.finish_void_tag()?;
        Ok(self.writer)
    }
}

/// The content of an element; closing it writes the matching end tag.
pub(crate) struct GuardedTagBody<'a> {
    writer: &'a mut HtmlWriter,
    tag_name: EcoString,
}

impl<'a> GuardedTagBody<'a> {
    pub(crate) fn writer(&mut self) -> &mut HtmlWriter {
        self.writer
    }

    pub(crate) fn end(self) -> HtmlWriteResult<&'a mut HtmlWriter> {
        self.writer.end_tag(&self.tag_name)?;
        Ok(self.writer)
    }
}
