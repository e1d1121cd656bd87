//! Sidebar state and command dispatch

use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::application::search::{DebouncedSearch, TitlePredicate, DEFAULT_DEBOUNCE_MS};
use crate::domain::entities::{FolderDraft, TreeNode};
use crate::domain::ports::{FolderStore, ViewTreeProvider};
use crate::domain::services::{
    build_recycle_list, build_view_tree, compute_index, insertion_context, FilterOptions,
};
use crate::error::DrilltreeResult;

use super::command::{Pane, SidebarCommand, SidebarEffect};

/// Sidebar construction options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarOptions {
    pub debounce: Duration,
    pub start_folded: bool,
    pub filter: FilterOptions,
    /// Expand folders that contain search hits
    pub auto_expand: bool,
}

impl Default for SidebarOptions {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            start_folded: false,
            filter: FilterOptions::default(),
            auto_expand: true,
        }
    }
}

/// View list + recycle bin with per-pane debounced search
pub struct Sidebar<W>
where
    W: ViewTreeProvider + FolderStore,
{
    workspace: W,
    pane: Pane,
    folded: bool,
    expanded: HashSet<String>,
    tree_search: DebouncedSearch<TitlePredicate>,
    recycle_search: DebouncedSearch<TitlePredicate>,
}

impl<W> Sidebar<W>
where
    W: ViewTreeProvider + FolderStore,
{
    pub fn new(workspace: W, options: SidebarOptions) -> Self {
        let expanded = HashSet::new();
        let tree = build_view_tree(&workspace.views(), &expanded);
        let recycle = build_recycle_list(&workspace.archived());

        let tree_search = DebouncedSearch::by_title(tree, options.debounce)
            .with_options(options.filter)
            .with_auto_expand(options.auto_expand);
        let recycle_search = DebouncedSearch::by_title(recycle, options.debounce);

        Self {
            workspace,
            pane: Pane::List,
            folded: options.start_folded,
            expanded,
            tree_search,
            recycle_search,
        }
    }

    pub fn workspace(&self) -> &W {
        &self.workspace
    }

    pub fn pane(&self) -> Pane {
        self.pane
    }

    pub fn is_folded(&self) -> bool {
        self.folded
    }

    /// Filtered view tree
    pub fn tree(&self) -> &[TreeNode] {
        self.tree_search.filtered()
    }

    /// Filtered recycle bin
    pub fn recycle_list(&self) -> &[TreeNode] {
        self.recycle_search.filtered()
    }

    /// Items of the visible pane
    pub fn visible(&self) -> &[TreeNode] {
        self.search(self.pane).filtered()
    }

    /// Settled query of a pane
    pub fn query(&self, pane: Pane) -> &str {
        self.search(pane).query()
    }

    /// Rebuild both lists from the provider, keeping settled queries
    pub fn refresh(&mut self) {
        let tree = build_view_tree(&self.workspace.views(), &self.expanded);
        let recycle = build_recycle_list(&self.workspace.archived());
        self.tree_search.set_source(tree);
        self.recycle_search.set_source(recycle);
    }

    /// Apply settled search input. Returns true if a list changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let tree_changed = self.tree_search.poll(now);
        let recycle_changed = self.recycle_search.poll(now);
        tree_changed || recycle_changed
    }

    /// Time until the next pending search settles
    pub fn next_due(&self, now: Instant) -> Option<Duration> {
        [
            self.tree_search.remaining(now),
            self.recycle_search.remaining(now),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Cancel pending timers; call when the sidebar goes away
    pub fn unmount(&mut self) {
        self.tree_search.cancel();
        self.recycle_search.cancel();
    }

    pub fn dispatch(
        &mut self,
        command: SidebarCommand,
        now: Instant,
    ) -> DrilltreeResult<SidebarEffect> {
        tracing::debug!(?command, pane = ?self.pane, "sidebar command");

        let effect = match command {
            SidebarCommand::AddView => SidebarEffect::NewView,
            SidebarCommand::AddFolder {
                name,
                parent_id,
                position,
            } => self.add_folder(name, parent_id, position)?,
            SidebarCommand::Recycle => self.switch_pane(Pane::Recycle),
            SidebarCommand::Back => self.switch_pane(Pane::List),
            SidebarCommand::Fold => {
                self.folded = !self.folded;
                SidebarEffect::Folded {
                    folded: self.folded,
                }
            }
            SidebarCommand::Search(text) => {
                self.search_mut(self.pane).input(text, now);
                SidebarEffect::SearchScheduled
            }
            SidebarCommand::ToggleFolder(key) => self.toggle_folder(key),
        };
        Ok(effect)
    }

    fn add_folder(
        &mut self,
        name: String,
        parent_id: Option<String>,
        position: Option<usize>,
    ) -> DrilltreeResult<SidebarEffect> {
        let name = name.trim();
        if name.is_empty() {
            tracing::warn!("ignoring add-folder with an empty name");
            return Ok(SidebarEffect::Ignored);
        }

        let records = self.workspace.views();
        let context = insertion_context(parent_id.as_deref(), &records, position);
        let index = compute_index(&context);
        let draft = FolderDraft::new(name, context.declared_parent_id.clone(), index);

        tracing::info!(name, parent = ?draft.parent_id, index, "saving folder");
        let folder = self.workspace.save_folder(draft)?;

        if let Some(parent) = folder.parent_key() {
            self.expanded.insert(parent.to_string());
        }
        self.refresh();
        Ok(SidebarEffect::FolderSaved { folder })
    }

    fn switch_pane(&mut self, pane: Pane) -> SidebarEffect {
        if self.pane == pane {
            return SidebarEffect::Ignored;
        }
        self.pane = pane;
        SidebarEffect::PaneChanged { pane }
    }

    fn toggle_folder(&mut self, key: String) -> SidebarEffect {
        let is_folder = self
            .workspace
            .views()
            .iter()
            .any(|r| r.id == key && r.is_folder);
        if !is_folder {
            return SidebarEffect::Ignored;
        }

        let expanded = if self.expanded.remove(&key) {
            false
        } else {
            self.expanded.insert(key.clone());
            true
        };
        self.refresh();
        SidebarEffect::FolderToggled { key, expanded }
    }

    fn search(&self, pane: Pane) -> &DebouncedSearch<TitlePredicate> {
        match pane {
            Pane::List => &self.tree_search,
            Pane::Recycle => &self.recycle_search,
        }
    }

    fn search_mut(&mut self, pane: Pane) -> &mut DebouncedSearch<TitlePredicate> {
        match pane {
            Pane::List => &mut self.tree_search,
            Pane::Recycle => &mut self.recycle_search,
        }
    }
}

impl<W> Drop for Sidebar<W>
where
    W: ViewTreeProvider + FolderStore,
{
    fn drop(&mut self) {
        self.unmount();
    }
}
