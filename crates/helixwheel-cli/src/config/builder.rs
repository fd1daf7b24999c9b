use super::defaults::DefaultsConfig;
use super::file::{FileConfig, FileRenderConfig};
use super::models::{AppConfig, InspectConfig};
use crate::cli::{DrawArgs, InspectArgs, WheelArgs};
use crate::error::{CliError, Result};
use crate::utils::parser;
use helixwheel::core::models::palette::Rgb;
use helixwheel::core::models::residue::ResidueCategory;
use helixwheel::core::models::sequence::Sequence;
use helixwheel::core::render::style::RenderStyle;
use helixwheel::engine::config::WheelConfigBuilder;
use helixwheel::engine::error::EngineError;
use std::str::FromStr;
use tracing::debug;

pub fn build_draw_config(args: &DrawArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();
    let sequence = parse_sequence(&args.wheel.sequence)?;
    let mut file_config = load_file_config(&args.wheel)?;

    let render = file_config.render.take().unwrap_or_default();
    let style = merge_style(args, render, &defaults);

    let wheel = wheel_builder(&args.wheel, file_config, &defaults)
        .style(style)
        .build()
        .map_err(EngineError::from)?;

    Ok(AppConfig {
        sequence,
        output: args.output.clone(),
        wheel,
    })
}

pub fn build_inspect_config(args: &InspectArgs) -> Result<InspectConfig> {
    let defaults = DefaultsConfig::default();
    let sequence = parse_sequence(&args.wheel.sequence)?;
    let file_config = load_file_config(&args.wheel)?;

    let wheel = wheel_builder(&args.wheel, file_config, &defaults)
        .build()
        .map_err(EngineError::from)?;

    Ok(InspectConfig { sequence, wheel })
}

fn parse_sequence(raw: &str) -> Result<Sequence> {
    let residues = parser::parse_sequence(raw)?;
    Sequence::new(&residues).map_err(|e| CliError::Engine(e.into()))
}

fn load_file_config(args: &WheelArgs) -> Result<FileConfig> {
    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };
    apply_set_values(file_config, &args.set_values)
}

fn wheel_builder(
    args: &WheelArgs,
    mut file_config: FileConfig,
    defaults: &DefaultsConfig,
) -> WheelConfigBuilder {
    let geometry = file_config.geometry.take().unwrap_or_default();
    let step_degrees = args
        .step_degrees
        .or(geometry.step_degrees)
        .unwrap_or(defaults.step_degrees);
    let radius = args
        .radius
        .or(geometry.radius)
        .unwrap_or(defaults.radius);
    debug!(step_degrees, radius, "Resolved wheel geometry.");

    let palette = file_config.palette.take().unwrap_or_default();
    [
        (ResidueCategory::Nonpolar, palette.nonpolar),
        (ResidueCategory::Polar, palette.polar),
        (ResidueCategory::Acidic, palette.acidic),
        (ResidueCategory::Basic, palette.basic),
        (ResidueCategory::Other, palette.other),
    ]
    .into_iter()
    .filter_map(|(category, color)| color.map(|c| (category, c)))
    .fold(
        WheelConfigBuilder::new()
            .step_degrees(step_degrees)
            .radius(radius),
        |builder, (category, color)| builder.color(category, color),
    )
}

fn merge_style(args: &DrawArgs, render: FileRenderConfig, defaults: &DefaultsConfig) -> RenderStyle {
    RenderStyle {
        width: args.width.or(render.width).unwrap_or(defaults.width),
        height: args.height.or(render.height).unwrap_or(defaults.height),
        marker_scale: render.marker_scale.unwrap_or(defaults.marker_scale),
        title: args.title.clone().or(render.title),
        show_labels: !args.no_labels && render.show_labels.unwrap_or(defaults.show_labels),
        show_numbers: !args.no_numbers && render.show_numbers.unwrap_or(defaults.show_numbers),
        show_legend: !args.no_legend && render.show_legend.unwrap_or(defaults.show_legend),
        show_backbone: !args.no_backbone
            && render.show_backbone.unwrap_or(defaults.show_backbone),
        fade_backbone: render.fade_backbone.unwrap_or(defaults.fade_backbone),
        show_moment: args.moment || render.show_moment.unwrap_or(defaults.show_moment),
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value))
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        if let Some(field) = key.strip_prefix("geometry.") {
            let geometry = config.geometry.get_or_insert_with(Default::default);
            match field {
                "step-degrees" => geometry.step_degrees = Some(parse_value(key, value_str, "float")?),
                "radius" => geometry.radius = Some(parse_value(key, value_str, "float")?),
                _ => return Err(unsupported_key(key)),
            }
        } else if let Some(field) = key.strip_prefix("render.") {
            let render = config.render.get_or_insert_with(Default::default);
            match field {
                "width" => render.width = Some(parse_value(key, value_str, "integer")?),
                "height" => render.height = Some(parse_value(key, value_str, "integer")?),
                "marker-scale" => render.marker_scale = Some(parse_value(key, value_str, "float")?),
                "title" => render.title = Some(value_str.to_string()),
                "show-labels" => render.show_labels = Some(parse_value(key, value_str, "boolean")?),
                "show-numbers" => {
                    render.show_numbers = Some(parse_value(key, value_str, "boolean")?)
                }
                "show-legend" => render.show_legend = Some(parse_value(key, value_str, "boolean")?),
                "show-backbone" => {
                    render.show_backbone = Some(parse_value(key, value_str, "boolean")?)
                }
                "fade-backbone" => {
                    render.fade_backbone = Some(parse_value(key, value_str, "boolean")?)
                }
                "show-moment" => render.show_moment = Some(parse_value(key, value_str, "boolean")?),
                _ => return Err(unsupported_key(key)),
            }
        } else if let Some(field) = key.strip_prefix("palette.") {
            let color: Rgb = value_str
                .parse()
                .map_err(|e| CliError::Config(format!("Invalid color value for {}: {}", key, e)))?;
            let palette = config.palette.get_or_insert_with(Default::default);
            match field {
                "nonpolar" => palette.nonpolar = Some(color),
                "polar" => palette.polar = Some(color),
                "acidic" => palette.acidic = Some(color),
                "basic" => palette.basic = Some(color),
                "other" => palette.other = Some(color),
                _ => return Err(unsupported_key(key)),
            }
        } else {
            return Err(unsupported_key(key));
        }
    }
    Ok(config)
}

fn unsupported_key(key: &str) -> CliError {
    CliError::Config(format!(
        "Unsupported configuration key for --set: '{}'",
        key
    ))
}
