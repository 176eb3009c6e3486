use anyhow::Result;

use folio_core::portfolio;

pub fn run(json: bool) -> Result<()> {
    if json {
        println!("{}", portfolio::catalog_json()?);
        return Ok(());
    }

    let projects = portfolio::projects();
    println!("Projects ({}):\n", projects.len());

    for project in projects {
        println!("  {}  {}", project.number, project.title);
        println!("    {}", project.description);
        println!("    Image: {}", project.image_url());
        println!();
    }

    Ok(())
}
