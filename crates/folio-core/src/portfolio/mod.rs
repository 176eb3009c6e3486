//! Portfolio content and page structure
//!
//! The project catalog is fixed at compile time. `page` lays the portfolio
//! out as a column of sections and resolves anchors against it; `preview`
//! tracks which project the pointer hovers.

pub mod page;
pub mod preview;

use serde::Serialize;

pub use page::{PageLayout, Section};
pub use preview::HoverPreview;

/// One portfolio project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: &'static str,
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Seed of the placeholder image service
    #[serde(skip)]
    image_seed: &'static str,
}

impl Project {
    /// Thumbnail shown while hovering the project in the list
    pub fn preview_url(&self) -> String {
        format!("https://picsum.photos/seed/{}/300/200", self.image_seed)
    }

    /// Large image shown on the project page
    pub fn image_url(&self) -> String {
        format!("https://picsum.photos/seed/{}/600/400", self.image_seed)
    }
}

static PROJECTS: [Project; 5] = [
    Project {
        id: "01",
        number: "01",
        title: "KONTRANS",
        description: "Detailed description of KONTRANS project.",
        image_seed: "brand",
    },
    Project {
        id: "02",
        number: "02",
        title: "OSA ENGENEERING",
        description: "Detailed description of OSA ENGENEERING project.",
        image_seed: "digital",
    },
    Project {
        id: "03",
        number: "03",
        title: "OFFICE PLANNER",
        description: "Detailed description of OFFICE PLANNER project.",
        image_seed: "video",
    },
    Project {
        id: "04",
        number: "04",
        title: "WEB PREDENCE",
        description: "Detailed description of WEB PREDENCE project.",
        image_seed: "web",
    },
    Project {
        id: "05",
        number: "05",
        title: "CREATIVE DIRECTR",
        description: "Detailed description of CREATIVE DIRECTR project.",
        image_seed: "creative",
    },
];

/// All projects in display order
pub fn projects() -> &'static [Project] {
    &PROJECTS
}

/// Look a project up by id
pub fn find(id: &str) -> crate::Result<&'static Project> {
    PROJECTS
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| crate::Error::ProjectNotFound(id.to_string()))
}

/// The catalog as pretty JSON, image URLs included
pub fn catalog_json() -> crate::Result<String> {
    #[derive(Serialize)]
    struct Entry<'a> {
        #[serde(flatten)]
        project: &'a Project,
        preview: String,
        image: String,
    }

    let entries: Vec<Entry<'_>> = PROJECTS
        .iter()
        .map(|project| Entry {
            project,
            preview: project.preview_url(),
            image: project.image_url(),
        })
        .collect();

    Ok(serde_json::to_string_pretty(&entries)?)
}
