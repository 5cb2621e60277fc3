use crate::format::PLACEHOLDER;
use crate::style::Role;
use crate::tree::{ContentTree, Node};

#[derive(Debug, Clone, Default)]
pub struct SheetMetrics {
    pub build_ms: f64,
    pub node_count: usize,
    pub text_count: usize,
    pub image_count: usize,
    pub equipment_items: usize,
    pub missing_prices: usize,
    pub eco_badge: bool,
}

impl SheetMetrics {
    pub fn from_tree(tree: &ContentTree, build_ms: f64) -> Self {
        let mut metrics = SheetMetrics {
            build_ms,
            node_count: 1,
            ..SheetMetrics::default()
        };
        tree.walk(|node, _| {
            metrics.node_count += 1;
            match node {
                Node::Text(leaf) => {
                    metrics.text_count += 1;
                    match leaf.role {
                        Role::EquipmentItem => metrics.equipment_items += 1,
                        Role::PriceBoxPrice if leaf.text == PLACEHOLDER => {
                            metrics.missing_prices += 1
                        }
                        _ => {}
                    }
                }
                Node::Image(_) => metrics.image_count += 1,
                _ => {
                    if node.role() == Role::EcoBadge {
                        metrics.eco_badge = true;
                    }
                }
            }
        });
        metrics
    }
}
