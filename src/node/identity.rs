//! Stable identity derivation: content-hashed node ids.
//!
//! Identity is the join key between the metadata tree and the fragment
//! registry, so it has to be reproducible: the same declaration must map to
//! the same id on every rebuild, no matter what unrelated state changed in
//! between. The derivation therefore depends only on declared content —
//! never on randomness, traversal order, or the clock.

use crate::node::model::{NodeId, Presentation};

/// Domain-separation key for the identity hash. Changing this invalidates
/// every persisted id, so it is versioned.
const IDENTITY_KEY: &[u8; 32] = b"prefpane.node.identity.v1\0\0\0\0\0\0\0";

/// Discriminates groups from items in identity derivation, so a group and an
/// item with the same title never share an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Group,
    Item,
}

impl NodeKind {
    fn discriminant(self) -> u8 {
        match self {
            NodeKind::Group => 1,
            NodeKind::Item => 2,
        }
    }
}

/// Derive the stable id for a declaration.
///
/// The id is the first 16 bytes of a keyed blake3 hash over a
/// length-prefixed encoding of `(kind, title, icon, presentation)`. Length
/// prefixes keep adjacent fields from bleeding into each other ("ab" + "c"
/// must not collide with "a" + "bc").
///
/// Two distinct declarations with identical inputs collide by design — two
/// sibling items both titled "Enabled" with no icon share one id. That is a
/// documented trade-off, not an error; use
/// [`Content::validate`](crate::compose::Content::validate) to detect it at
/// authoring time.
pub fn node_id(
    kind: NodeKind,
    title: &str,
    icon: Option<&str>,
    presentation: Option<Presentation>,
) -> NodeId {
    let mut hasher = blake3::Hasher::new_keyed(IDENTITY_KEY);
    hasher.update(&[kind.discriminant()]);
    update_field(&mut hasher, Some(title));
    update_field(&mut hasher, icon);
    hasher.update(&[match presentation {
        None => 0,
        Some(Presentation::Navigation) => 1,
        Some(Presentation::Inline) => 2,
    }]);

    let hash = hasher.finalize();
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&hash.as_bytes()[..16]);
    NodeId(u128::from_be_bytes(bytes))
}

/// Hash an optional string field with a presence marker and length prefix.
fn update_field(hasher: &mut blake3::Hasher, value: Option<&str>) {
    match value {
        None => {
            hasher.update(&[0]);
        }
        Some(text) => {
            hasher.update(&[1]);
            hasher.update(&(text.len() as u64).to_be_bytes());
            hasher.update(text.as_bytes());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_inputs_same_id() {
        let a = node_id(
            NodeKind::Group,
            "General",
            Some("gearshape"),
            Some(Presentation::Navigation),
        );
        let b = node_id(
            NodeKind::Group,
            "General",
            Some("gearshape"),
            Some(Presentation::Navigation),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn stable_across_many_rebuilds() {
        let first = node_id(NodeKind::Item, "Wi-Fi", None, None);
        for _ in 0..100 {
            assert_eq!(node_id(NodeKind::Item, "Wi-Fi", None, None), first);
        }
    }

    #[test]
    fn kind_discriminates() {
        let group = node_id(NodeKind::Group, "Wi-Fi", None, None);
        let item = node_id(NodeKind::Item, "Wi-Fi", None, None);
        assert_ne!(group, item);
    }

    #[test]
    fn title_discriminates() {
        let a = node_id(NodeKind::Item, "Wi-Fi", None, None);
        let b = node_id(NodeKind::Item, "Bluetooth", None, None);
        assert_ne!(a, b);
    }

    #[test]
    fn icon_discriminates() {
        let none = node_id(NodeKind::Item, "Wi-Fi", None, None);
        let some = node_id(NodeKind::Item, "Wi-Fi", Some("wifi"), None);
        assert_ne!(none, some);
    }

    #[test]
    fn presentation_discriminates() {
        let nav = node_id(NodeKind::Group, "Net", None, Some(Presentation::Navigation));
        let inline = node_id(NodeKind::Group, "Net", None, Some(Presentation::Inline));
        assert_ne!(nav, inline);
    }

    #[test]
    fn field_boundaries_do_not_bleed() {
        // Title "ab" + icon "c" vs title "a" + icon "bc": length prefixes
        // must keep these apart.
        let a = node_id(NodeKind::Item, "ab", Some("c"), None);
        let b = node_id(NodeKind::Item, "a", Some("bc"), None);
        assert_ne!(a, b);
    }

    #[test]
    fn empty_icon_differs_from_no_icon() {
        let none = node_id(NodeKind::Item, "X", None, None);
        let empty = node_id(NodeKind::Item, "X", Some(""), None);
        assert_ne!(none, empty);
    }

    #[test]
    fn id_uses_full_width() {
        // The upper 64 bits must not be zero for typical inputs — the id is
        // a full 128-bit hash, not a zero-extended 64-bit one.
        let id = node_id(NodeKind::Group, "General", Some("gearshape"), None);
        assert_ne!(id.as_raw() >> 64, 0);
    }

    #[test]
    fn identical_declarations_collide_by_design() {
        let a = node_id(NodeKind::Item, "Enabled", None, None);
        let b = node_id(NodeKind::Item, "Enabled", None, None);
        assert_eq!(a, b);
    }
}
