#[derive(Debug, Clone, Copy)]
pub struct NavLink {
    pub name: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub name: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
    pub sub_items: &'static [NavLink],
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        name: "Home",
        url: "/",
        icon: "home",
        sub_items: &[],
    },
    NavItem {
        name: "Company",
        url: "#",
        icon: "zap",
        sub_items: &[
            NavLink {
                name: "About Us",
                url: "/about-us",
            },
            NavLink {
                name: "Careers",
                url: "/careers",
            },
        ],
    },
    NavItem {
        name: "Resources",
        url: "#",
        icon: "book",
        sub_items: &[
            NavLink {
                name: "Blog",
                url: "/blog",
            },
            NavLink {
                name: "Use Cases",
                url: "/use-cases",
            },
        ],
    },
    NavItem {
        name: "Products",
        url: "/product",
        icon: "box",
        sub_items: &[],
    },
    NavItem {
        name: "Contact Us",
        url: "/contact-us",
        icon: "mail",
        sub_items: &[],
    },
];

impl NavItem {
    pub fn has_dropdown(&self) -> bool {
        !self.sub_items.is_empty()
    }

    pub fn is_active(&self, path: &str) -> bool {
        self.url == path || self.sub_items.iter().any(|sub| sub.url == path)
    }
}

/// Navbar state for one rendered page.
#[derive(Debug, Clone)]
pub struct Navbar {
    pub items: &'static [NavItem],
    pub path: String,
}

impl Navbar {
    pub fn for_path(path: &str) -> Self {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        Self {
            items: NAV_ITEMS,
            path: path.to_string(),
        }
    }

    pub fn active(&self) -> Option<&'static str> {
        self.items
            .iter()
            .find(|item| item.is_active(&self.path))
            .map(|item| item.name)
    }

    pub fn is_active(&self, item: &NavItem) -> bool {
        item.is_active(&self.path)
    }

    pub fn is_current(&self, url: &str) -> bool {
        self.path == url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_top_level() {
        assert_eq!(Navbar::for_path("/").active(), Some("Home"));
        assert_eq!(Navbar::for_path("/product").active(), Some("Products"));
        assert_eq!(Navbar::for_path("/contact-us/").active(), Some("Contact Us"));
    }

    #[test]
    fn test_active_through_sub_item() {
        assert_eq!(Navbar::for_path("/careers").active(), Some("Company"));
        assert_eq!(Navbar::for_path("/use-cases").active(), Some("Resources"));
    }

    #[test]
    fn test_at_most_one_active() {
        for path in ["/", "/about-us", "/blog", "/product", "/nope"] {
            let nav = Navbar::for_path(path);
            let active = nav.items.iter().filter(|i| nav.is_active(i)).count();
            assert!(active <= 1, "{path}");
        }
        assert_eq!(Navbar::for_path("/nope").active(), None);
    }
}
