use std::collections::{HashMap, HashSet};

use rayon::prelude::*;

use crate::{
    lexicon::{Lexicon, TrieNode},
    models::{Grid, Position, NEIGHBOR_OFFSETS},
};

/// Shortest word that counts in the standard game
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

/// How the search decides to abandon a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pruning {
    /// Stop as soon as no lexicon word starts with the letters so far
    #[default]
    Prefix,
    /// Walk every simple path on the board. Only practical on tiny grids.
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Words with fewer letters are not reported
    pub min_length: usize,
    pub pruning: Pruning,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_WORD_LENGTH,
            pruning: Pruning::Prefix,
        }
    }
}

/// Words found so far, each with the first path that spelled it
type Found = HashMap<String, Vec<Position>>;

/// Finds every lexicon word that can be traced on a grid
pub struct Solver<'l> {
    lexicon: &'l Lexicon,
    options: SearchOptions,
}

impl<'l> Solver<'l> {
    pub fn new(lexicon: &'l Lexicon) -> Self {
        Self {
            lexicon,
            options: SearchOptions::default(),
        }
    }

    pub fn with_options(lexicon: &'l Lexicon, options: SearchOptions) -> Self {
        Self { lexicon, options }
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.options.min_length = min_length;
        self
    }

    /// Every word on the grid, uppercase and deduplicated
    pub fn find_all(&self, grid: &Grid) -> HashSet<String> {
        self.find_paths(grid).into_keys().collect()
    }

    /// Every word on the grid together with one path that spells it
    pub fn find_paths(&self, grid: &Grid) -> HashMap<String, Vec<Position>> {
        let mut found = Found::new();
        let mut descent = Descent::new(grid, self.lexicon, self.options);

        for start in grid.positions() {
            descent.run(start, &mut found);
        }

        tracing::debug!(
            "Searched {} starting cells, found {} words",
            grid.len(),
            found.len()
        );

        found
    }

    /// Words on paths that begin at `start`
    pub fn find_from(&self, grid: &Grid, start: Position) -> HashSet<String> {
        let mut found = Found::new();
        Descent::new(grid, self.lexicon, self.options).run(start, &mut found);
        found.into_keys().collect()
    }

    /// Same result as [`Solver::find_all`], with one task per starting cell.
    /// Each task fills its own map and the maps are merged at the end.
    pub fn find_all_parallel(&self, grid: &Grid) -> HashSet<String> {
        let starts: Vec<Position> = grid.positions().collect();

        let found = starts
            .into_par_iter()
            .map(|start| {
                let mut found = Found::new();
                Descent::new(grid, self.lexicon, self.options).run(start, &mut found);
                found
            })
            .reduce(Found::new, |mut merged, partial| {
                for (word, path) in partial {
                    merged.entry(word).or_insert(path);
                }
                merged
            });

        tracing::debug!(
            "Searched {} starting cells in parallel, found {} words",
            grid.len(),
            found.len()
        );

        found.into_keys().collect()
    }
}

/// Find every word of at least `min_length` letters traceable on `grid`
pub fn find_all(grid: &Grid, lexicon: &Lexicon, min_length: usize) -> HashSet<String> {
    Solver::new(lexicon).min_length(min_length).find_all(grid)
}

/// One cell on the current path
struct Frame<'l> {
    pos: Position,
    /// Trie node matching the letters up to and including this cell
    node: Option<&'l TrieNode>,
    /// Length of `word` before this cell's tile was appended
    restore_len: usize,
    /// Next entry of `NEIGHBOR_OFFSETS` to try
    next_offset: usize,
}

/// Depth-first walk with an explicit stack, so board size does not
/// bound recursion depth.
struct Descent<'g, 'l> {
    grid: &'g Grid,
    lexicon: &'l Lexicon,
    options: SearchOptions,
    visited: Vec<bool>,
    word: String,
    path: Vec<Position>,
    stack: Vec<Frame<'l>>,
}

impl<'g, 'l> Descent<'g, 'l> {
    fn new(grid: &'g Grid, lexicon: &'l Lexicon, options: SearchOptions) -> Self {
        Self {
            grid,
            lexicon,
            options,
            visited: vec![false; grid.len()],
            word: String::new(),
            path: Vec::with_capacity(grid.len()),
            stack: Vec::with_capacity(grid.len()),
        }
    }

    /// Explore every path starting at `start`
    fn run(&mut self, start: Position, found: &mut Found) {
        let root = self.lexicon.root();
        self.enter(start, Some(root), found);

        while let Some(frame) = self.stack.last_mut() {
            let offset = frame.next_offset;
            frame.next_offset += 1;
            let (pos, node) = (frame.pos, frame.node);

            let Some(&(dr, dc)) = NEIGHBOR_OFFSETS.get(offset) else {
                self.leave();
                continue;
            };

            if let Some(next) = self.grid.offset(pos, dr, dc) {
                if !self.visited[self.grid.index(next)] {
                    self.enter(next, node, found);
                }
            }
        }

        debug_assert!(self.word.is_empty() && self.path.is_empty());
    }

    /// Step onto `pos`, recording a word if one ends here.
    /// Nothing is pushed when the branch is pruned.
    fn enter(&mut self, pos: Position, parent: Option<&'l TrieNode>, found: &mut Found) {
        let grid = self.grid;
        let tile = grid.tile(pos).as_str();
        let node = parent.and_then(|n| n.descend(tile));

        if node.is_none() && self.options.pruning == Pruning::Prefix {
            return;
        }

        let restore_len = self.word.len();
        self.word.push_str(tile);
        self.visited[grid.index(pos)] = true;
        self.path.push(pos);

        let is_word = match self.options.pruning {
            Pruning::Prefix => node.is_some_and(TrieNode::is_word),
            Pruning::Disabled => self.lexicon.is_word(&self.word),
        };

        if is_word && self.word.chars().count() >= self.options.min_length {
            found
                .entry(self.word.clone())
                .or_insert_with(|| self.path.clone());
        }

        self.stack.push(Frame {
            pos,
            node,
            restore_len,
            next_offset: 0,
        });
    }

    /// Backtrack off the cell on top of the stack
    fn leave(&mut self) {
        if let Some(frame) = self.stack.pop() {
            self.visited[self.grid.index(frame.pos)] = false;
            self.word.truncate(frame.restore_len);
            self.path.pop();
        }
    }
}
