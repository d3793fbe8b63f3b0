//! An in-memory stand-in for the portfolio page.
//!
//! Follows the DOM rules the prank relies on: a region under a detached ancestor is not
//! visible, queries return document order, and the recorded "next sibling" is the next
//! attached sibling at removal time.

use crate::prank::{OverlayMessage, PageSurface, Placement, RegionId};
use std::collections::BTreeMap;

pub const BODY: &str = "body";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKind {
    Header,
    Grid,
    Card,
    Dir,
    Section,
    Heading,
    Paragraph,
    Footer,
    Terminal,
    Script,
}

impl RegionKind {
    /// Removal priority, and whether only the first match of a kind is considered.
    const PRIORITY: [(RegionKind, bool); 8] = [
        (RegionKind::Header, true),
        (RegionKind::Grid, true),
        (RegionKind::Card, false),
        (RegionKind::Dir, false),
        (RegionKind::Section, false),
        (RegionKind::Footer, true),
        (RegionKind::Heading, false),
        (RegionKind::Paragraph, false),
    ];
}

#[derive(Debug, Clone)]
struct Region {
    kind: RegionKind,
    parent: RegionId,
}

#[derive(Debug, Clone)]
pub struct StaticPage {
    regions: BTreeMap<RegionId, Region>,
    /// Attached children of each region, in order.
    children: BTreeMap<RegionId, Vec<RegionId>>,
    overlay: Option<OverlayMessage>,
}

impl Default for StaticPage {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticPage {
    /// An empty `<body>`.
    pub fn new() -> Self {
        let mut children = BTreeMap::new();
        children.insert(RegionId::new(BODY), Vec::new());
        Self {
            regions: BTreeMap::new(),
            children,
            overlay: None,
        }
    }

    /// The portfolio layout: header, directory grid, three sections (one card per project),
    /// footer, terminal and a script tag.
    pub fn portfolio(project_count: usize) -> Self {
        use RegionKind::*;

        let mut page = Self::new();
        page.append(BODY, "header", Header);
        page.append("header", "tagline", Paragraph);
        page.append(BODY, "grid", Grid);
        for dir in ["about", "projects", "contact"] {
            page.append("grid", &format!("dir-{dir}"), Dir);
        }
        for section in ["about", "projects", "contact"] {
            let id = format!("section-{section}");
            page.append(BODY, &id, Section);
            page.append(&id, &format!("h2-{section}"), Heading);
            if section == "projects" {
                for i in 0..project_count {
                    let card = format!("card-{i}");
                    page.append(&id, &card, Card);
                    page.append(&card, &format!("card-{i}-blurb"), Paragraph);
                }
            } else {
                page.append(&id, &format!("p-{section}"), Paragraph);
            }
        }
        page.append(BODY, "footer", Footer);
        page.append("footer", "p-footer", Paragraph);
        page.append(BODY, "terminal", Terminal);
        page.append(BODY, "script", Script);
        page
    }

    /// Adds `id` as the last child of `parent`.
    pub fn append(&mut self, parent: &str, id: &str, kind: RegionKind) {
        let id = RegionId::new(id);
        let parent = RegionId::new(parent);
        self.children.entry(parent.clone()).or_default().push(id.clone());
        self.children.entry(id.clone()).or_default();
        self.regions.insert(id, Region { kind, parent });
    }

    /// Attached regions in document order (depth first from the body).
    pub fn document_order(&self) -> Vec<RegionId> {
        let mut out = Vec::new();
        let mut stack: Vec<&RegionId> = self
            .children
            .get(&RegionId::new(BODY))
            .map(|c| c.iter().rev().collect())
            .unwrap_or_default();
        while let Some(id) = stack.pop() {
            out.push(id.clone());
            if let Some(kids) = self.children.get(id) {
                stack.extend(kids.iter().rev());
            }
        }
        out
    }

    /// Snapshot of every parent's attached children, for comparing layouts.
    pub fn layout(&self) -> BTreeMap<RegionId, Vec<RegionId>> {
        self.children.clone()
    }

    pub fn overlay(&self) -> Option<OverlayMessage> {
        self.overlay
    }

    fn kind(&self, id: &RegionId) -> Option<RegionKind> {
        self.regions.get(id).map(|r| r.kind)
    }
}

impl PageSurface for StaticPage {
    fn removable_regions(&self) -> Vec<RegionId> {
        let visible = self.document_order();
        let mut out = Vec::new();
        for (kind, first_only) in RegionKind::PRIORITY {
            let matches = visible.iter().filter(|id| self.kind(id) == Some(kind));
            if first_only {
                out.extend(matches.take(1).cloned());
            } else {
                out.extend(matches.cloned());
            }
        }
        out
    }

    fn top_level_regions(&self) -> Vec<RegionId> {
        self.children
            .get(&RegionId::new(BODY))
            .map(|kids| {
                kids.iter()
                    .filter(|id| {
                        !matches!(
                            self.kind(id),
                            Some(RegionKind::Terminal) | Some(RegionKind::Script)
                        )
                    })
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    fn remove(&mut self, region: &RegionId) -> Option<Placement> {
        let parent = self.regions.get(region)?.parent.clone();
        let siblings = self.children.get_mut(&parent)?;
        let pos = siblings.iter().position(|id| id == region)?;
        siblings.remove(pos);
        Some(Placement {
            region: region.clone(),
            next_sibling: siblings.get(pos).cloned(),
            parent,
        })
    }

    fn reinsert(&mut self, placement: &Placement) {
        let siblings = self.children.entry(placement.parent.clone()).or_default();
        let at = placement
            .next_sibling
            .as_ref()
            .and_then(|next| siblings.iter().position(|id| id == next));
        match at {
            Some(pos) => siblings.insert(pos, placement.region.clone()),
            None => siblings.push(placement.region.clone()),
        }
    }

    fn show_overlay(&mut self, message: OverlayMessage) {
        self.overlay = Some(message);
    }

    fn update_overlay(&mut self, message: OverlayMessage) {
        if self.overlay.is_some() {
            self.overlay = Some(message);
        }
    }

    fn remove_overlay(&mut self) {
        self.overlay = None;
    }
}
