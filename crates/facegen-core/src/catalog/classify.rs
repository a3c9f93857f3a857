// crates/facegen-core/src/catalog/classify.rs
//
// (group, option, conditioned) -> Target | Unclassified
//
// Total function: a group lookup table refined by a few option-name prefixes.
// Paint groups are faction-only; other conditioned options are context-restricted
// and never enter the generic pools.

use crate::catalog::Target;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    Target(Target),
    Unclassified,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Group {
    Plain(Target),
    Blemishes,
    Lips,
    Paint,
}

const GROUPS: &[(&str, Group)] = &[
    ("skin tone", Group::Plain(Target::Skin)),
    ("brows", Group::Plain(Target::Eyebrows)),
    ("eyebrows", Group::Plain(Target::Eyebrows)),
    ("blemishes", Group::Blemishes),
    ("freckles", Group::Plain(Target::Freckles)),
    ("moles", Group::Plain(Target::Moles)),
    ("lips", Group::Lips),
    ("lipstick", Group::Plain(Target::Lipstick)),
    ("dirt", Group::Plain(Target::Dirt)),
    ("grime", Group::Plain(Target::Dirt)),
    ("scars", Group::Plain(Target::Scars)),
    ("damage", Group::Plain(Target::Scars)),
    ("face paint", Group::Paint),
    ("markings", Group::Paint),
    ("tattoos", Group::Paint),
];

const BLEMISH_PREFIXES: &[(&str, Target)] = &[("mole", Target::Moles), ("freckle", Target::Freckles)];

const LIPS_PREFIXES: &[(&str, Target)] = &[("lipstick", Target::Lipstick)];

const PAINT_PREFIXES: &[(&str, Target)] = &[
    ("raider", Target::Raiders),
    ("children of atom", Target::ChildrenOfAtom),
    ("atom", Target::ChildrenOfAtom),
];

pub fn classify(group: &str, option: &str, conditioned: bool) -> Classification {
    let Some(g) = lookup_group(group) else {
        return Classification::Unclassified;
    };

    match g {
        Group::Paint => {
            if !conditioned {
                return Classification::Unclassified;
            }
            by_prefix(option, PAINT_PREFIXES).map_or(Classification::Unclassified, Classification::Target)
        }
        _ if conditioned => Classification::Unclassified,
        Group::Plain(t) => Classification::Target(t),
        Group::Blemishes => Classification::Target(by_prefix(option, BLEMISH_PREFIXES).unwrap_or(Target::Blemishes)),
        Group::Lips => Classification::Target(by_prefix(option, LIPS_PREFIXES).unwrap_or(Target::Lips)),
    }
}

fn lookup_group(group: &str) -> Option<Group> {
    let g = group.trim();
    GROUPS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(g))
        .map(|(_, grp)| *grp)
}

fn by_prefix(option: &str, table: &[(&str, Target)]) -> Option<Target> {
    let o = option.trim();
    table
        .iter()
        .find(|(prefix, _)| starts_with_ignore_case(o, prefix))
        .map(|(_, t)| *t)
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len()
        && s.is_char_boundary(prefix.len())
        && s[..prefix.len()].eq_ignore_ascii_case(prefix)
}
