use crate::models::{Message, Role};
use crate::render::Renderer;

pub const TITLE_MAX_CHARS: usize = 50;
pub const UNTITLED: &str = "New Chat";

/// Identifies one block within its transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub u64);

impl std::fmt::Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum BlockKind {
    Message { role: Role, text: String },
    Loading,
}

/// A rendered entry of the visible conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    id: BlockId,
    kind: BlockKind,
    html: String,
}

impl Block {
    pub fn id(&self) -> BlockId {
        self.id
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.kind, BlockKind::Loading)
    }
}

/// Captured copy of a rendered conversation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    blocks: Vec<Block>,
    next_id: u64,
}

impl Snapshot {
    pub fn markup(&self) -> String {
        self.blocks.iter().map(|b| b.html.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// The conversation currently on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    blocks: Vec<Block>,
    next_id: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn push_message(&mut self, renderer: &Renderer, message: &Message) -> BlockId {
        let id = self.allocate_id();
        let html = renderer.render_message(id, message);
        self.blocks.push(Block {
            id,
            kind: BlockKind::Message {
                role: message.role,
                text: message.text.clone(),
            },
            html,
        });
        id
    }

    pub fn push_loading(&mut self, renderer: &Renderer) -> BlockId {
        let id = self.allocate_id();
        self.blocks.push(Block { id, kind: BlockKind::Loading, html: renderer.loading_placeholder() });
        id
    }

    /// Returns false when the block is no longer present.
    pub fn remove(&mut self, id: BlockId) -> bool {
        let before = self.blocks.len();
        self.blocks.retain(|b| b.id != id);
        self.blocks.len() != before
    }

    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    pub fn markup(&self) -> String {
        self.blocks.iter().map(|b| b.html.as_str()).collect()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot { blocks: self.blocks.clone(), next_id: self.next_id }
    }

    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.blocks = snapshot.blocks.clone();
        // Ids keep growing so a pending placeholder id never matches a restored block.
        self.next_id = self.next_id.max(snapshot.next_id);
    }

    /// Title from the first user message, or `"New Chat"`.
    pub fn title(&self) -> String {
        self.blocks
            .iter()
            .find_map(|b| match &b.kind {
                BlockKind::Message { role: Role::User, text, .. } => Some(derive_title(text)),
                _ => None,
            })
            .unwrap_or_else(|| UNTITLED.to_string())
    }

    fn allocate_id(&mut self) -> BlockId {
        let id = BlockId(self.next_id);
        self.next_id += 1;
        id
    }
}

pub fn derive_title(first_message: &str) -> String {
    let trimmed = first_message.trim();
    if trimmed.chars().count() > TITLE_MAX_CHARS {
        format!("{}...", trimmed.chars().take(TITLE_MAX_CHARS).collect::<String>())
    } else {
        trimmed.to_string()
    }
}
