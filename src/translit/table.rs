//! Cyrillic↔Latin mapping tables (2016 Karakalpak orthography)
//!
//! Direction-specific ordered rules. The two directions are not mechanical
//! inverses: ш and щ both map to "sh", э collapses into "e", and the
//! Latin→Cyrillic table resolves each digraph to a single letter.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Cyrillic → Latin rules. Sources are single letters; both tokens are
/// stored lowercase, case is restored after matching.
pub static CYR_TO_LAT: &[(&str, &str)] = &[
    ("а", "a"),
    ("ә", "á"),
    ("б", "b"),
    ("в", "v"),
    ("г", "g"),
    ("ғ", "ǵ"),
    ("д", "d"),
    ("е", "e"),
    ("ё", "yo"),
    ("ж", "j"),
    ("з", "z"),
    ("и", "i"),
    ("й", "y"),
    ("к", "k"),
    ("қ", "q"),
    ("л", "l"),
    ("м", "m"),
    ("н", "n"),
    ("ң", "ń"),
    ("о", "o"),
    ("ө", "ó"),
    ("п", "p"),
    ("р", "r"),
    ("с", "s"),
    ("т", "t"),
    ("у", "u"),
    ("ү", "ú"),
    ("ў", "w"),
    ("ф", "f"),
    ("х", "x"),
    ("ҳ", "h"),
    ("ц", "c"),
    ("ч", "ch"),
    ("ш", "sh"),
    ("щ", "sh"), // collapses with ш
    ("ъ", ""),   // hard sign drops
    ("ы", "ı"),
    ("ь", ""),   // soft sign drops
    ("э", "e"),  // collapses with е
    ("ю", "yu"),
    ("я", "ya"),
];

/// Latin → Cyrillic rules. Digraphs come before any single letter that
/// prefixes them so greedy longest-match is never shadowed.
pub static LAT_TO_CYR: &[(&str, &str)] = &[
    ("sh", "ш"),
    ("ch", "ч"),
    ("ya", "я"),
    ("yo", "ё"),
    ("yu", "ю"),
    ("a", "а"),
    ("á", "ә"),
    ("b", "б"),
    ("c", "ц"),
    ("d", "д"),
    ("e", "е"),
    ("f", "ф"),
    ("g", "г"),
    ("ǵ", "ғ"),
    ("h", "ҳ"),
    ("i", "и"),
    ("ı", "ы"),
    ("j", "ж"),
    ("k", "к"),
    ("l", "л"),
    ("m", "м"),
    ("n", "н"),
    ("ń", "ң"),
    ("o", "о"),
    ("ó", "ө"),
    ("p", "п"),
    ("q", "қ"),
    ("r", "р"),
    ("s", "с"),
    ("t", "т"),
    ("u", "у"),
    ("ú", "ү"),
    ("v", "в"),
    ("w", "ў"),
    ("x", "х"),
    ("y", "й"),
    ("z", "з"),
    // older-orthography alternates fold into the same letters
    ("ä", "ә"),
    ("ö", "ө"),
    ("ü", "ү"),
    ("ş", "ш"),
    ("ğ", "ғ"),
    ("ñ", "ң"),
];

/// Direction of a conversion pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    CyrToLat,
    LatToCyr,
}

/// Rules bucketed by first source character, longest source first.
type RuleIndex = HashMap<char, Vec<(&'static str, &'static str)>>;

fn build_index(rules: &[(&'static str, &'static str)]) -> RuleIndex {
    let mut index: RuleIndex = HashMap::new();

    for &(source, target) in rules {
        let first = match source.chars().next() {
            Some(c) => c,
            None => continue,
        };
        index.entry(first).or_default().push((source, target));
    }

    for bucket in index.values_mut() {
        // longest first so digraphs win over their prefixes
        bucket.sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()));
    }

    index
}

static CYR_TO_LAT_INDEX: LazyLock<RuleIndex> = LazyLock::new(|| build_index(CYR_TO_LAT));
static LAT_TO_CYR_INDEX: LazyLock<RuleIndex> = LazyLock::new(|| build_index(LAT_TO_CYR));

/// Longest rule matching the case-folded input at `pos`.
///
/// Returns (source length in chars, target token), or `None` when the
/// character has no mapping and passes through.
pub fn longest_match(
    direction: Direction,
    folded: &[char],
    pos: usize,
) -> Option<(usize, &'static str)> {
    let index = match direction {
        Direction::CyrToLat => &*CYR_TO_LAT_INDEX,
        Direction::LatToCyr => &*LAT_TO_CYR_INDEX,
    };

    let bucket = index.get(&folded[pos])?;
    for &(source, target) in bucket {
        let len = source.chars().count();
        if pos + len <= folded.len() && source.chars().eq(folded[pos..pos + len].iter().copied()) {
            return Some((len, target));
        }
    }

    None
}
