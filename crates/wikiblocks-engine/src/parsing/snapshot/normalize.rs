use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::Block;

#[derive(Debug, Serialize)]
pub struct Snap {
    pub blocks: Vec<BlockSnap>,
}

#[derive(Debug, Serialize)]
pub struct BlockSnap {
    pub text: String,
    pub tags: Vec<TagSnap>,
}

#[derive(Debug, Serialize)]
pub struct TagSnap {
    pub kind: String,
    /// `None` for tags covering the whole block.
    pub span: Option<(usize, usize)>,
    pub text: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub value: BTreeMap<String, String>,
}

pub fn normalize(blocks: &[Block]) -> Snap {
    let blocks = blocks
        .iter()
        .map(|b| BlockSnap {
            text: b.text.clone(),
            tags: b
                .tags
                .iter()
                .map(|t| TagSnap {
                    kind: t.kind.to_string(),
                    span: t.span.map(|s| (s.start, s.end)),
                    text: b.tag_text(t).to_string(),
                    value: t.value.clone().unwrap_or_default(),
                })
                .collect(),
        })
        .collect();

    Snap { blocks }
}
