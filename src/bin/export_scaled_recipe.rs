//! Utility to print a scaled recipe template as markdown
//!
//! Usage: export_scaled_recipe <template_id> <desired_servings> [us|metric] [original_servings]

use conversion_kitchen::catalog::Catalog;
use conversion_kitchen::kitchen::parse_amount;
use conversion_kitchen::tools::recipes;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.len() < 2 {
        eprintln!("Usage: export_scaled_recipe <template_id> <desired_servings> [us|metric] [original_servings]");
        eprintln!();
        let catalog = Catalog::from_env()?;
        eprintln!("Templates:");
        for template in catalog.templates() {
            eprintln!("  {:<10} {} (base {})", template.id, template.name, template.base_servings);
        }
        std::process::exit(2);
    }

    let catalog = Catalog::from_env()?;

    let desired = parse_amount(&args[1]);
    let unit_system = args.get(2).map(String::as_str);
    let original = args.get(3).and_then(|s| parse_amount(s));

    let export = recipes::export_scaled_recipe(&catalog, &args[0], unit_system, original, desired)?;
    print!("{}", export.markdown);

    Ok(())
}
