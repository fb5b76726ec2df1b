#![allow(dead_code)]

use proptest::prelude::*;
use treeselect::TreeNode;

/// A small technology tree: two levels under "Frontend" and "Backend",
/// one disabled leaf.
pub fn tech_tree() -> Vec<TreeNode> {
    vec![
        TreeNode::new("1", "Frontend", "frontend")
            .child(
                TreeNode::new("1-1", "React", "react")
                    .child(TreeNode::new("1-1-1", "React Hooks", "react-hooks"))
                    .child(TreeNode::new("1-1-2", "React Router", "react-router"))
                    .child(TreeNode::new("1-1-3", "Redux", "redux")),
            )
            .child(
                TreeNode::new("1-2", "Vue", "vue")
                    .child(TreeNode::new("1-2-1", "Vue 3", "vue3"))
                    .child(TreeNode::new("1-2-2", "Vuex", "vuex")),
            )
            .child(TreeNode::new("1-3", "Angular", "angular").disabled()),
        TreeNode::new("2", "Backend", "backend")
            .child(
                TreeNode::new("2-1", "Node.js", "nodejs")
                    .child(TreeNode::new("2-1-1", "Express", "express")),
            )
            .child(TreeNode::new("2-2", "Python", "python")),
    ]
}

/// The two-node tree from the Frontend/React scenario.
pub fn frontend_react() -> Vec<TreeNode> {
    vec![TreeNode::new("1", "Frontend", "fe").child(TreeNode::new("1-1", "React", "react"))]
}

#[derive(Debug, Clone)]
struct RawNode(String, Vec<RawNode>, bool);

fn raw_node() -> impl Strategy<Value = RawNode> {
    let leaf = ("[a-cA-C]{1,3}", any::<bool>()).prop_map(|(l, d)| RawNode(l, Vec::new(), d));
    leaf.prop_recursive(4, 40, 4, |inner| {
        ("[a-cA-C]{1,3}", prop::collection::vec(inner, 0..4), any::<bool>())
            .prop_map(|(l, c, d)| RawNode(l, c, d))
    })
}

fn build(raw: RawNode, next: &mut usize) -> TreeNode {
    *next += 1;
    let n = *next;
    let mut node = TreeNode::new(format!("n{}", n), raw.0, format!("v{}", n));
    node.disabled = raw.2;
    node.children = raw.1.into_iter().map(|c| build(c, next)).collect();
    node
}

/// Random forests with unique ids and values and short labels over a
/// three-letter alphabet, so search terms hit often.
pub fn forest() -> impl Strategy<Value = Vec<TreeNode>> {
    prop::collection::vec(raw_node(), 0..4).prop_map(|raws| {
        let mut next = 0;
        raws.into_iter().map(|r| build(r, &mut next)).collect()
    })
}

/// Search terms over the forest alphabet (including the empty term).
pub fn term() -> impl Strategy<Value = String> {
    "[a-cA-C]{0,2}"
}

/// Every node paired with the ids of its strict ancestors.
pub fn with_ancestors(roots: &[TreeNode]) -> Vec<(&TreeNode, Vec<String>)> {
    fn go<'a>(
        nodes: &'a [TreeNode],
        path: &mut Vec<String>,
        out: &mut Vec<(&'a TreeNode, Vec<String>)>,
    ) {
        for node in nodes {
            out.push((node, path.clone()));
            path.push(node.id.clone());
            go(&node.children, path, out);
            path.pop();
        }
    }
    let mut out = Vec::new();
    go(roots, &mut Vec::new(), &mut out);
    out
}
