use std::collections::{HashMap, VecDeque};
use std::hash::{Hash, Hasher};
use std::sync::{Mutex, OnceLock};

use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

// Simple FIFO cache (bounded) for highlighted blocks
// key = (lang_norm, hash)

fn hash_code(lang: &str, code: &str) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    lang.hash(&mut hasher);
    code.hash(&mut hasher);
    hasher.finish()
}

struct SimpleCache {
    map: HashMap<(String, u64), String>,
    order: VecDeque<(String, u64)>,
    cap: usize,
}

impl SimpleCache {
    fn new(cap: usize) -> Self {
        Self {
            map: HashMap::new(),
            order: VecDeque::new(),
            cap,
        }
    }
    fn get(&mut self, k: &(String, u64)) -> Option<String> {
        self.map.get(k).cloned()
    }
    fn put(&mut self, k: (String, u64), v: String) {
        if !self.map.contains_key(&k) {
            self.order.push_back(k.clone());
        }
        self.map.insert(k, v);
        while self.map.len() > self.cap {
            if let Some(old) = self.order.pop_front() {
                self.map.remove(&old);
            } else {
                break;
            }
        }
    }
}

static HIGHLIGHT_CACHE: Mutex<Option<SimpleCache>> = Mutex::new(None);

fn get_cache() -> std::sync::MutexGuard<'static, Option<SimpleCache>> {
    HIGHLIGHT_CACHE.lock().unwrap()
}

fn ensure_cache(cap: usize) {
    let mut guard = get_cache();
    if guard.is_none() {
        *guard = Some(SimpleCache::new(cap));
    }
}

pub(super) fn normalize_lang_hint(s: &str) -> String {
    let t = s.trim().to_ascii_lowercase();
    match t.as_str() {
        "py" | "python" => "python".into(),
        "bash" | "sh" | "zsh" | "shell" => "bash".into(),
        "js" | "javascript" | "jsx" => "javascript".into(),
        "ts" | "tsx" | "typescript" => "typescript".into(),
        "json" => "json".into(),
        "toml" => "toml".into(),
        "yaml" | "yml" => "yaml".into(),
        "rust" | "rs" => "rust".into(),
        "go" => "go".into(),
        "c" | "h" => "c".into(),
        "cpp" | "cc" | "cxx" | "hpp" | "hxx" => "cpp".into(),
        "java" => "java".into(),
        "kotlin" | "kt" => "kotlin".into(),
        "swift" => "swift".into(),
        "html" => "html".into(),
        "css" => "css".into(),
        "sql" => "sql".into(),
        other => other.into(),
    }
}

/// Highlight a code block into class-tagged `<span>` markup. Returns `None`
/// when the language is unknown so the caller can fall back to escaped plain
/// text. Re-running on the same block is idempotent and served from the
/// cache.
pub fn highlight_html(lang_hint: &str, code: &str) -> Option<String> {
    ensure_cache(64);
    let lang_norm = normalize_lang_hint(lang_hint);

    static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
    let ps = SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines);

    let key = (lang_norm.clone(), hash_code(&lang_norm, code));
    if let Some(html) = get_cache().as_mut().and_then(|c| c.get(&key)) {
        return Some(html);
    }

    let syntax = ps.find_syntax_by_token(&lang_norm)?;

    let mut generator = ClassedHTMLGenerator::new_with_class_style(syntax, ps, ClassStyle::Spaced);
    for line in LinesWithEndings::from(code) {
        generator
            .parse_html_for_line_which_includes_newline(line)
            .ok()?;
    }
    let html = generator.finalize();

    {
        let mut guard = get_cache();
        if let Some(cache) = guard.as_mut() {
            cache.put(key, html.clone());
        }
    }
    Some(html)
}
