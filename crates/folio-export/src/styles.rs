use serde::{Deserialize, Serialize};

/// Points per millimetre.
pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// Convert millimetres to PDF points.
pub const fn mm(value: f32) -> f32 {
    value * PT_PER_MM
}

/// Layout configuration for review reports. All lengths are in points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportStyles {
    pub page: PageGeometry,
    pub logo: LogoPlacement,

    /// Horizontal padding inside text cells.
    pub cell_padding: f32,

    /// Space between the top margin and the first body line on every page.
    pub header_height: f32,

    /// Font size of the reviewer label and name.
    pub reviewer_size: f32,
    /// Width of the cell holding the reviewer label.
    pub reviewer_label_width: f32,
    /// Row height of the reviewer block.
    pub reviewer_height: f32,
    /// Gap after the reviewer block.
    pub reviewer_gap: f32,

    /// Font size of section titles.
    pub section_size: f32,
    /// Row height of a section title.
    pub section_height: f32,
    /// Gap after a section title.
    pub section_gap: f32,

    /// Font size of questions and responses.
    pub body_size: f32,
    /// Line height of questions and responses.
    pub body_line_height: f32,
    /// Gap after each question/response pair.
    pub pair_gap: f32,

    pub labels: ReportLabels,
}

/// Page size and margins.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
}

impl PageGeometry {
    /// Width available to body text.
    pub fn content_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }

    /// Lowest position (from the top edge) body text may reach.
    pub fn content_bottom(&self) -> f32 {
        self.height - self.margin_bottom
    }
}

/// Where the logo sits on each page, measured from the top-left corner.
/// Its height follows the image's aspect ratio.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LogoPlacement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
}

/// Fixed text emitted around the CSV content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportLabels {
    /// Prepended to every section title.
    pub section_prefix: String,
    /// Label in front of the reviewer name.
    pub reviewer: String,
    /// Shown in place of an absent response.
    pub no_response: String,
}

impl Default for ReportLabels {
    fn default() -> Self {
        Self {
            section_prefix: "Section: ".to_string(),
            reviewer: "Reviewed by: ".to_string(),
            no_response: "No response".to_string(),
        }
    }
}

impl Default for ReportStyles {
    fn default() -> Self {
        Self {
            page: PageGeometry {
                width: mm(210.0),
                height: mm(297.0),
                margin_left: mm(10.0),
                margin_right: mm(10.0),
                margin_top: mm(10.0),
                margin_bottom: mm(20.0),
            },
            logo: LogoPlacement {
                x: mm(10.0),
                y: mm(8.0),
                width: mm(33.0),
            },
            cell_padding: mm(1.0),
            header_height: mm(30.0),
            reviewer_size: 12.0,
            reviewer_label_width: mm(55.0),
            reviewer_height: mm(10.0),
            reviewer_gap: mm(10.0),
            section_size: 12.0,
            section_height: mm(10.0),
            section_gap: mm(4.0),
            body_size: 10.0,
            body_line_height: mm(6.0),
            pair_gap: mm(4.0),
            labels: ReportLabels::default(),
        }
    }
}
