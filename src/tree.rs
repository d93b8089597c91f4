use alloc::vec::Vec;
use core::ops::ControlFlow;

use crate::client::{Compound, ItemSpan, Node, ParseClient};
use crate::incomplete::Incomplete;
use crate::value::Item;
use crate::{CborError, ErrorCode};

/// Client that materializes the first top-level item as an [`Item`] tree.
///
/// Open compounds live on `parents`; each finalized child is appended to the accumulator on
/// top. Building stops as soon as the root is complete.
pub struct TreeBuilder<'a> {
    root: Option<Item<'a>>,
    parents: Vec<Incomplete<'a>>,
    position: usize,
    error: Option<CborError>,
}

impl<'a> TreeBuilder<'a> {
    pub const fn new() -> Self {
        Self {
            root: None,
            parents: Vec::new(),
            position: 0,
            error: None,
        }
    }

    pub fn finish(self) -> Result<(Item<'a>, usize), CborError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        // The parser either reports an error or completes a root, so an empty builder means
        // nothing was decoded.
        self.root
            .map(|item| (item, self.position))
            .ok_or(CborError::new(ErrorCode::EmptyInput, self.position))
    }

    fn fail(&mut self, code: ErrorCode, offset: usize) -> ControlFlow<()> {
        self.error = Some(CborError::new(code, offset));
        ControlFlow::Break(())
    }

    fn append(&mut self, item: Item<'a>, span: ItemSpan) -> ControlFlow<()> {
        let Some(parent) = self.parents.last_mut() else {
            self.root = Some(item);
            self.position = span.end;
            return ControlFlow::Break(());
        };
        match parent.add(item) {
            Ok(()) => ControlFlow::Continue(()),
            Err(code) => self.fail(code, span.header),
        }
    }
}

impl<'a> ParseClient<'a> for TreeBuilder<'a> {
    fn item(&mut self, node: Node<'a>, span: ItemSpan) -> ControlFlow<()> {
        match node {
            Node::Leaf(item) => self.append(item, span),
            Node::Compound(compound) => {
                let chunk_error = self.parents.last().and_then(Incomplete::chunk_error);
                if let Some(code) = chunk_error {
                    return self.fail(code, span.header);
                }
                self.parents.push(Incomplete::new(compound));
                ControlFlow::Continue(())
            }
        }
    }

    fn item_end(&mut self, compound: Compound, span: ItemSpan) -> ControlFlow<()> {
        let Some(incomplete) = self.parents.pop() else {
            return self.fail(ErrorCode::NotEnoughEntries(compound.major_type()), span.header);
        };
        tracing::trace!(
            ?compound,
            size = incomplete.size(),
            offset = span.header,
            "finalizing compound item"
        );
        match incomplete.finalize() {
            Ok(item) => self.append(item, span),
            Err(code) => self.fail(code, span.header),
        }
    }

    fn error(&mut self, error: &CborError) {
        self.position = error.offset;
        self.error = Some(*error);
    }
}
