/// A single node of the [`Trie`].
#[derive(Debug, Clone, Default)]
struct TrieNode {
    key:      char,
    terminal: bool,
    children: Vec<TrieNode>,
}

impl TrieNode {
    fn child(&self, key: char) -> Option<&Self> {
        self.children.iter().find(|c| c.key == key)
    }

    fn child_mut_or_insert(&mut self, key: char) -> &mut Self {
        let index = match self.children.iter().position(|c| c.key == key) {
            Some(index) => index,
            None => {
                self.children.push(Self { key,
                                          ..Self::default() });
                self.children.len() - 1
            },
        };
        &mut self.children[index]
    }
}

/// Prefix index of declared names.
///
/// The tokenizer keeps one trie for keywords, one for declared variables and
/// one for callable functions. Words are inserted while the scan is still in
/// progress, so a query answers "is this name known *so far*", never "is this
/// name declared anywhere in the source". Classification is therefore
/// order-dependent: callers must scan strictly left to right.
///
/// # Example
/// ```
/// use ascent::interpreter::trie::Trie;
///
/// let mut trie = Trie::new();
/// for word in ["for", "while", "false"] {
///     trie.insert(word);
/// }
///
/// assert!(trie.partial_contains("f"));
/// assert!(!trie.partial_contains("for"));
/// assert!(!trie.contains("fo"));
/// assert!(trie.starts_with("wh"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Trie {
    root:  TrieNode,
    words: usize,
}

impl Trie {
    /// Creates an empty trie.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `word`. Inserting a word twice has no effect.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.child_mut_or_insert(c);
        }
        if !node.terminal {
            node.terminal = true;
            self.words += 1;
        }
    }

    /// Returns `true` if `word` was inserted exactly.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some_and(|node| node.terminal)
    }

    /// Returns `true` if any stored word begins with `prefix`.
    ///
    /// The empty prefix matches as soon as one word is stored.
    #[must_use]
    pub fn starts_with(&self, prefix: &str) -> bool {
        if prefix.is_empty() {
            return self.words > 0;
        }
        self.find(prefix).is_some()
    }

    /// Returns `true` if `prefix` can still grow into a stored word but is
    /// not itself a stored word.
    ///
    /// Matchers use this to decide whether consuming one more character is
    /// worthwhile: once the buffer is a complete word it must stop growing.
    #[must_use]
    pub fn partial_contains(&self, prefix: &str) -> bool {
        self.starts_with(prefix) && !self.contains(prefix)
    }

    /// Returns the byte length of the longest stored word that is a prefix of
    /// `text`, if any.
    ///
    /// # Example
    /// ```
    /// use ascent::interpreter::trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("x");
    /// trie.insert("xs");
    ///
    /// assert_eq!(trie.longest_match("xs+1"), Some(2));
    /// assert_eq!(trie.longest_match("x+1"), Some(1));
    /// assert_eq!(trie.longest_match("y"), None);
    /// ```
    #[must_use]
    pub fn longest_match(&self, text: &str) -> Option<usize> {
        let mut node = &self.root;
        let mut longest = None;
        for (offset, c) in text.char_indices() {
            match node.child(c) {
                Some(next) => node = next,
                None => break,
            }
            if node.terminal {
                longest = Some(offset + c.len_utf8());
            }
        }
        longest
    }

    /// Number of distinct words stored.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.words
    }

    /// Returns `true` if no word has been inserted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.words == 0
    }

    fn find(&self, prefix: &str) -> Option<&TrieNode> {
        prefix.chars().try_fold(&self.root, |node, c| node.child(c))
    }
}

impl<'a> FromIterator<&'a str> for Trie {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut trie = Self::new();
        for word in iter {
            trie.insert(word);
        }
        trie
    }
}
