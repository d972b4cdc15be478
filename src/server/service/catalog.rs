//! Static widget & theme catalogs served to the page builder.
//!
//! Both catalogs are constant data. Widget types listed here are a convention for the front
//! end only; pages may hold components of any type.

use serde_json::{json, Value};

use crate::model::catalog::{
    ComponentCatalogDto, ThemeCatalogDto, ThemeColorsDto, ThemeDto, WidgetCategoryDto,
    WidgetTemplateDto,
};

pub(crate) const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1523050854058-8df90110c9f1?q=80&w=2070&auto=format&fit=crop";
pub(crate) const GALLERY_IMAGES: [&str; 4] = [
    "https://images.unsplash.com/photo-1509062522246-3755977927d7?q=80&w=2132&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1427504494785-3a9ca28497b1?q=80&w=2070&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1592280771884-f25f2b8423f5?q=80&w=1974&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1564981797816-1043664bf78d?q=80&w=1974&auto=format&fit=crop",
];
const STAFF_IMAGE_WOMAN: &str =
    "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?q=80&w=1976&auto=format&fit=crop";
const STAFF_IMAGE_MAN: &str =
    "https://images.unsplash.com/photo-1544717305-2782549b5136?q=80&w=1974&auto=format&fit=crop";

/// Feature cards shared by the features widget and the demo home page.
pub(crate) fn default_features() -> Value {
    json!([
        {
            "icon": "GraduationCap",
            "title": "Excellence in Education",
            "description": "Award-winning curriculum designed for success"
        },
        {
            "icon": "Users",
            "title": "Dedicated Teachers",
            "description": "Experienced educators who care about every student"
        },
        {
            "icon": "Building",
            "title": "Modern Facilities",
            "description": "State-of-the-art classrooms and sports facilities"
        }
    ])
}

fn widget(
    widget_type: &str,
    name: &str,
    icon: &str,
    category: &str,
    default_props: Value,
) -> WidgetTemplateDto {
    WidgetTemplateDto {
        widget_type: widget_type.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        category: category.to_string(),
        default_props,
    }
}

fn category(id: &str, name: &str) -> WidgetCategoryDto {
    WidgetCategoryDto {
        id: id.to_string(),
        name: name.to_string(),
    }
}

fn theme(
    id: &str,
    name: &str,
    description: &str,
    [primary, secondary, accent, background, text]: [&str; 5],
    font_family: &str,
) -> ThemeDto {
    ThemeDto {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        colors: ThemeColorsDto {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            accent: accent.to_string(),
            background: background.to_string(),
            text: text.to_string(),
        },
        font_family: font_family.to_string(),
    }
}

pub struct CatalogService;

impl CatalogService {
    /// Widget templates with their default props, grouped into categories.
    pub fn components() -> ComponentCatalogDto {
        let widgets = vec![
            widget(
                "hero",
                "Hero Section",
                "Image",
                "sections",
                json!({
                    "title": "Welcome to Our School",
                    "subtitle": "Inspiring young minds since 1990",
                    "backgroundImage": HERO_IMAGE,
                    "buttonText": "Learn More",
                    "buttonLink": "#about"
                }),
            ),
            widget(
                "text",
                "Text Block",
                "Type",
                "basic",
                json!({
                    "content": "Enter your text here...",
                    "align": "left",
                    "fontSize": "base"
                }),
            ),
            widget(
                "heading",
                "Heading",
                "Heading",
                "basic",
                json!({
                    "content": "Section Title",
                    "level": "h2",
                    "align": "center"
                }),
            ),
            widget(
                "image",
                "Image",
                "ImageIcon",
                "basic",
                json!({
                    "src": GALLERY_IMAGES[0],
                    "alt": "School image",
                    "width": "100%"
                }),
            ),
            widget(
                "button",
                "Button",
                "MousePointerClick",
                "basic",
                json!({
                    "text": "Click Me",
                    "link": "#",
                    "variant": "primary"
                }),
            ),
            widget(
                "features",
                "Features Grid",
                "Grid3X3",
                "sections",
                json!({
                    "title": "Why Choose Us",
                    "features": default_features()
                }),
            ),
            widget(
                "gallery",
                "Image Gallery",
                "Images",
                "sections",
                json!({
                    "title": "School Gallery",
                    "images": GALLERY_IMAGES
                }),
            ),
            widget(
                "announcements",
                "Announcements",
                "Bell",
                "school",
                json!({
                    "title": "Latest News",
                    "items": [
                        {
                            "title": "Parent-Teacher Conference",
                            "date": "Jan 15, 2026",
                            "excerpt": "Join us for our upcoming parent-teacher conference..."
                        },
                        {
                            "title": "Spring Break Schedule",
                            "date": "Jan 10, 2026",
                            "excerpt": "Important dates for the upcoming spring break..."
                        },
                        {
                            "title": "Science Fair Winners",
                            "date": "Jan 5, 2026",
                            "excerpt": "Congratulations to all our science fair participants..."
                        }
                    ]
                }),
            ),
            widget(
                "events",
                "Events Calendar",
                "Calendar",
                "school",
                json!({
                    "title": "Upcoming Events",
                    "events": [
                        { "title": "Open House", "date": "2026-01-20", "time": "10:00 AM" },
                        { "title": "Sports Day", "date": "2026-01-25", "time": "9:00 AM" },
                        { "title": "Art Exhibition", "date": "2026-02-01", "time": "2:00 PM" }
                    ]
                }),
            ),
            widget(
                "staff",
                "Staff Directory",
                "Users",
                "school",
                json!({
                    "title": "Meet Our Team",
                    "staff": [
                        { "name": "Dr. Sarah Johnson", "role": "Principal", "image": STAFF_IMAGE_WOMAN },
                        { "name": "Mr. James Wilson", "role": "Vice Principal", "image": STAFF_IMAGE_MAN },
                        { "name": "Ms. Emily Davis", "role": "Head of Elementary", "image": STAFF_IMAGE_WOMAN }
                    ]
                }),
            ),
            widget(
                "contact",
                "Contact Section",
                "Mail",
                "sections",
                json!({
                    "title": "Contact Us",
                    "address": "123 Education Lane, Learning City, LC 12345",
                    "phone": "(555) 123-4567",
                    "email": "info@school.edu",
                    "showMap": true
                }),
            ),
            widget(
                "footer",
                "Footer",
                "PanelBottom",
                "sections",
                json!({
                    "schoolName": "Elementary School",
                    "address": "123 Education Lane",
                    "phone": "(555) 123-4567",
                    "email": "info@school.edu",
                    "socialLinks": {
                        "facebook": "#",
                        "twitter": "#",
                        "instagram": "#"
                    }
                }),
            ),
            widget(
                "spacer",
                "Spacer",
                "SeparatorHorizontal",
                "basic",
                json!({ "height": "60" }),
            ),
        ];

        let categories = vec![
            category("basic", "Basic Elements"),
            category("sections", "Page Sections"),
            category("school", "School Specific"),
        ];

        ComponentCatalogDto {
            widgets,
            categories,
        }
    }

    /// Visual themes a school can pick from; `default` matches the default school palette.
    pub fn themes() -> ThemeCatalogDto {
        let themes = vec![
            theme(
                "default",
                "Classic Blue",
                "Trustworthy blue with warm yellow accents",
                ["#1D4ED8", "#FBBF24", "#F97316", "#FFFFFF", "#0F172A"],
                "Inter, sans-serif",
            ),
            theme(
                "ocean",
                "Ocean Breeze",
                "Calm teal tones for a fresh, modern look",
                ["#0E7490", "#67E8F9", "#F59E0B", "#F0FDFA", "#134E4A"],
                "Nunito, sans-serif",
            ),
            theme(
                "forest",
                "Forest Green",
                "Natural greens for an outdoor, growth-minded school",
                ["#15803D", "#A3E635", "#CA8A04", "#F7FEE7", "#14532D"],
                "Merriweather, serif",
            ),
            theme(
                "sunset",
                "Sunset Warmth",
                "Playful oranges and pinks for younger learners",
                ["#EA580C", "#F472B6", "#FACC15", "#FFF7ED", "#431407"],
                "Baloo 2, cursive",
            ),
            theme(
                "royal",
                "Royal Purple",
                "Elegant purple and gold for a traditional academy",
                ["#6D28D9", "#EAB308", "#DB2777", "#FAF5FF", "#1E1B4B"],
                "Playfair Display, serif",
            ),
        ];

        ThemeCatalogDto { themes }
    }
}
