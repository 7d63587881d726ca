use hanoi::{Disk, DiskCount, PegState};

/// Page title and drawing geometry, passed to every renderer call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub title: String,
    pub width: i32,
    pub height: i32,
    /// Horizontal centre of pegs A, B and C.
    pub peg_x: [i32; 3],
    /// Top edge of the base plate; disks stack upward from here.
    pub base_y: i32,
    pub peg_height: i32,
    pub disk_height: i32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: "Towers of Hanoi".into(),
            width: 600,
            height: 400,
            peg_x: [150, 300, 450],
            base_y: 200,
            peg_height: 130,
            disk_height: 12,
        }
    }
}

pub fn disk_width(disk: Disk) -> i32 {
    10 + i32::from(disk.0) * 10
}

/// Hue in degrees, spread evenly over the configured disk count.
pub fn disk_hue(disk: Disk, total: DiskCount) -> u32 {
    u32::from(disk.0.saturating_sub(1)) * 360 / u32::from(total.get())
}

pub fn disk_color(disk: Disk, total: DiskCount) -> String {
    format!("hsl({}, 90%, 70%)", disk_hue(disk, total))
}

pub fn render_svg(state: &PegState, total: DiskCount, cfg: &RenderConfig) -> String {
    // Tall stacks would otherwise poke out above the pegs.
    let peg_height = cfg
        .peg_height
        .max((i32::from(total.get()) + 1) * cfg.disk_height);

    let mut svg = Vec::with_capacity(usize::from(total.get()) + 6);
    svg.push(format!(
        r#"<svg width="{}" height="{}" xmlns="http://www.w3.org/2000/svg">"#,
        cfg.width, cfg.height
    ));
    for x in cfg.peg_x {
        svg.push(format!(
            r##"<rect x="{}" y="{}" width="4" height="{peg_height}" fill="#444"/>"##,
            x - 2,
            cfg.base_y - peg_height
        ));
    }
    svg.push(format!(
        r##"<rect x="10" y="{}" width="{}" height="10" fill="#333"/>"##,
        cfg.base_y,
        cfg.width - 20
    ));
    for (peg, disks) in state.iter() {
        let centre = cfg.peg_x[peg.index()];
        for (level, disk) in disks.iter().enumerate() {
            let w = disk_width(*disk);
            let y = cfg.base_y - (level as i32 + 1) * cfg.disk_height;
            svg.push(format!(
                r#"<rect x="{}" y="{y}" width="{w}" height="{}" rx="4" fill="{}" data-disk="{}"/>"#,
                centre - w / 2,
                cfg.disk_height,
                disk_color(*disk, total),
                disk.0
            ));
        }
    }
    svg.push("</svg>".into());
    svg.join("\n")
}
