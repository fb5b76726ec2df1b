//! Built-in sample tree.

use treeselect::TreeNode;

fn branch(id: &str, label: &str, value: &str, children: Vec<TreeNode>) -> TreeNode {
    TreeNode::new(id, label, value).with_children(children)
}

pub fn sample_tree() -> Vec<TreeNode> {
    vec![
        branch(
            "1",
            "Frontend",
            "frontend",
            vec![
                branch(
                    "1-1",
                    "React",
                    "react",
                    vec![
                        TreeNode::new("1-1-1", "React Hooks", "react-hooks"),
                        TreeNode::new("1-1-2", "React Router", "react-router"),
                        TreeNode::new("1-1-3", "Redux", "redux"),
                    ],
                ),
                branch(
                    "1-2",
                    "Vue",
                    "vue",
                    vec![
                        TreeNode::new("1-2-1", "Vue 3", "vue3"),
                        TreeNode::new("1-2-2", "Vuex", "vuex"),
                        TreeNode::new("1-2-3", "Vue Router", "vue-router"),
                    ],
                ),
                TreeNode::new("1-3", "Angular", "angular").disabled(),
            ],
        ),
        branch(
            "2",
            "Backend",
            "backend",
            vec![
                branch(
                    "2-1",
                    "Node.js",
                    "nodejs",
                    vec![
                        TreeNode::new("2-1-1", "Express", "express"),
                        TreeNode::new("2-1-2", "Koa", "koa"),
                        TreeNode::new("2-1-3", "NestJS", "nestjs"),
                    ],
                ),
                branch(
                    "2-2",
                    "Python",
                    "python",
                    vec![
                        TreeNode::new("2-2-1", "Django", "django"),
                        TreeNode::new("2-2-2", "Flask", "flask"),
                        TreeNode::new("2-2-3", "FastAPI", "fastapi"),
                    ],
                ),
                branch(
                    "2-3",
                    "Java",
                    "java",
                    vec![
                        TreeNode::new("2-3-1", "Spring Boot", "spring-boot"),
                        TreeNode::new("2-3-2", "Spring Cloud", "spring-cloud"),
                    ],
                ),
            ],
        ),
        branch(
            "3",
            "Database",
            "database",
            vec![
                TreeNode::new("3-1", "MySQL", "mysql"),
                TreeNode::new("3-2", "PostgreSQL", "postgresql"),
                TreeNode::new("3-3", "MongoDB", "mongodb"),
                TreeNode::new("3-4", "Redis", "redis"),
            ],
        ),
        branch(
            "4",
            "DevOps",
            "devops",
            vec![
                TreeNode::new("4-1", "Docker", "docker"),
                TreeNode::new("4-2", "Kubernetes", "kubernetes"),
                TreeNode::new("4-3", "CI/CD", "cicd"),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_tree_is_valid() {
        let tree = sample_tree();
        assert!(treeselect::node::validate(&tree).is_ok());
        assert_eq!(treeselect::node::walk(&tree).count(), 31);
    }
}
