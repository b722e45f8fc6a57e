//! Visual theming for the family tree canvas.

use super::types::Gender;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Darken the color by a factor (0.0 = unchanged, 1.0 = black)
	pub fn darken(self, factor: f64) -> Self {
		let f = 1.0 - factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * f) as u8,
			g: (self.g as f64 * f) as u8,
			b: (self.b as f64 * f) as u8,
			a: self.a,
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Fill colors for person boxes, keyed by gender.
#[derive(Clone, Debug)]
pub struct GenderPalette {
	pub male: Color,
	pub female: Color,
	pub other: Color,
}

impl GenderPalette {
	pub fn get(&self, gender: Gender) -> Color {
		match gender {
			Gender::Male => self.male,
			Gender::Female => self.female,
			Gender::Other => self.other,
		}
	}
}

/// Background style configuration.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	/// Primary background color
	pub color: Color,
	/// Secondary color for the radial gradient center
	pub color_secondary: Color,
	pub use_gradient: bool,
}

/// Connector style.
#[derive(Clone, Debug)]
pub struct EdgeStyle {
	pub color: Color,
	/// Radius of the rounded bends of smooth-step connectors, in world units.
	pub corner_radius: f64,
}

/// Node card style.
#[derive(Clone, Debug)]
pub struct CardStyle {
	pub fill: Color,
	pub border: Color,
	pub corner_radius: f64,
	/// Inner padding between the card edge and person boxes.
	pub padding: f64,
	/// Connection handle dots on the card edges.
	pub handle: Color,
	pub text: Color,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub name: &'static str,
	pub background: BackgroundStyle,
	pub edge: EdgeStyle,
	pub card: CardStyle,
	pub genders: GenderPalette,
}

impl Theme {
	/// Dark slate theme (default)
	pub fn default_theme() -> Self {
		Self {
			name: "default",
			background: BackgroundStyle {
				color: Color::rgb(22, 27, 34),
				color_secondary: Color::rgb(30, 35, 42),
				use_gradient: true,
			},
			edge: EdgeStyle {
				color: Color::rgba(140, 160, 180, 0.7),
				corner_radius: 8.0,
			},
			card: CardStyle {
				fill: Color::rgb(36, 42, 51),
				border: Color::rgba(140, 160, 180, 0.5),
				corner_radius: 6.0,
				padding: 10.0,
				handle: Color::rgb(140, 160, 180),
				text: Color::rgba(255, 255, 255, 0.92),
			},
			genders: GenderPalette {
				male: Color::rgb(94, 129, 172),
				female: Color::rgb(172, 108, 130),
				other: Color::rgb(119, 158, 140),
			},
		}
	}

	/// Light paper theme, closer to a printed family chart
	pub fn parchment() -> Self {
		Self {
			name: "parchment",
			background: BackgroundStyle {
				color: Color::rgb(238, 232, 218),
				color_secondary: Color::rgb(248, 244, 234),
				use_gradient: true,
			},
			edge: EdgeStyle {
				color: Color::rgba(110, 90, 70, 0.8),
				corner_radius: 8.0,
			},
			card: CardStyle {
				fill: Color::rgb(252, 250, 244),
				border: Color::rgb(170, 150, 120),
				corner_radius: 4.0,
				padding: 10.0,
				handle: Color::rgb(120, 100, 80),
				text: Color::rgb(40, 32, 24),
			},
			genders: GenderPalette {
				male: Color::rgb(180, 205, 230),
				female: Color::rgb(236, 190, 200),
				other: Color::rgb(200, 220, 190),
			},
		}
	}

	/// Looks up a preset by name, falling back to the default theme.
	pub fn by_name(name: &str) -> Self {
		match name {
			"parchment" => Self::parchment(),
			_ => Self::default_theme(),
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::default_theme()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_output() {
		assert_eq!(Color::rgb(255, 0, 16).to_css(), "#ff0010");
		assert_eq!(
			Color::rgba(1, 2, 3, 0.5).to_css(),
			"rgba(1, 2, 3, 0.5)"
		);
	}

	#[test]
	fn darken_bounds() {
		let c = Color::rgba(100, 100, 100, 0.5);
		assert_eq!(c.darken(1.0), Color::rgba(0, 0, 0, 0.5));
		assert_eq!(c.darken(0.0), c);
		assert_eq!(c.darken(0.5), Color::rgba(50, 50, 50, 0.5));
	}

	#[test]
	fn presets_by_name() {
		assert_eq!(Theme::by_name("parchment").name, "parchment");
		assert_eq!(Theme::by_name("unknown").name, "default");
	}

	#[test]
	fn palette_covers_all_genders() {
		let theme = Theme::default();
		assert_ne!(
			theme.genders.get(Gender::Male),
			theme.genders.get(Gender::Female)
		);
		assert_eq!(theme.genders.get(Gender::Other), theme.genders.other);
	}
}
