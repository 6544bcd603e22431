use plategen_core::{DecimalContext, TrigError};
use plategen_layout::{Key, Layout};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::config::RenderSettings;
use crate::footprint::AcousticMode;
use crate::outline::{Outline, Placement};
use crate::primitive::Primitive;
use crate::sink::Sink;

/// Turns keys into switch, stabilizer and acoustic cutouts.
///
/// Local shapes are built once; each key only places and rotates them about its own center.
#[derive(Debug)]
pub struct PlateRenderer {
    settings: RenderSettings,
    ctx: DecimalContext,
    switch: Vec<Primitive>,
    stabilizer: Vec<Primitive>,
    acoustic: Vec<Primitive>,
}

impl PlateRenderer {
    #[must_use]
    pub fn new(settings: RenderSettings) -> Self {
        let (width, height) = settings.footprint.size();
        let switch = Outline::centered(width, height).fillet(settings.cutout_radius);
        let stabilizer = settings.stabilizer.outline().fillet(settings.stab_radius);
        let acoustic = AcousticMode::outline(settings.footprint).fillet(settings.acoustics_radius);
        Self {
            ctx: settings.context.clone(),
            settings,
            switch,
            stabilizer,
            acoustic,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Render every key in order, then report the layout bounds.
    pub fn render<S: Sink + ?Sized>(
        &mut self,
        layout: &Layout,
        sink: &mut S,
    ) -> Result<usize, TrigError> {
        let mut count = 0;
        for key in &layout.keys {
            count += self.render_key(key, sink)?;
        }
        if let Some(bounds) = layout.bounds {
            sink.bounds(bounds);
        }
        info!(
            keys = layout.keys.len(),
            primitives = count,
            footprint = %self.settings.footprint,
            stabilizer = %self.settings.stabilizer,
            "plate rendered"
        );
        Ok(count)
    }

    /// Emit one key's cutouts. Returns the number of primitives written.
    pub fn render_key<S: Sink + ?Sized>(
        &mut self,
        key: &Key,
        sink: &mut S,
    ) -> Result<usize, TrigError> {
        let center = key.center();
        let width = key.apparent_width();
        let mut count = 0;

        let cutout_angle = key.cutout_angle();
        let (cos, sin) = self.ctx.cos_sin(cutout_angle)?;
        let placement = Placement {
            origin: center,
            shift: Decimal::ZERO,
            angle: cutout_angle,
            cos,
            sin,
        };
        count += emit(&self.switch, &placement, &self.ctx, sink);

        let stabs = self.settings.stabilizer.spacing(width);
        let slots = self.settings.acoustics.spacing(width);
        if stabs.is_some() || slots.is_some() {
            let stab_angle = key.stab_angle();
            let (cos, sin) = self.ctx.cos_sin(stab_angle)?;
            let at = |shift: Decimal| Placement {
                origin: center,
                shift,
                angle: stab_angle,
                cos,
                sin,
            };
            if let Some(offset) = stabs {
                debug!(key = %key.name(), %width, %offset, "stabilizers");
                count += emit(&self.stabilizer, &at(offset), &self.ctx, sink);
                count += emit(&self.stabilizer, &at(-offset), &self.ctx, sink);
            }
            if let Some(offset) = slots {
                debug!(key = %key.name(), %width, %offset, "acoustic cutouts");
                count += emit(&self.acoustic, &at(offset), &self.ctx, sink);
                count += emit(&self.acoustic, &at(-offset), &self.ctx, sink);
            }
        }
        Ok(count)
    }
}

fn emit<S: Sink + ?Sized>(
    shape: &[Primitive],
    placement: &Placement,
    ctx: &DecimalContext,
    sink: &mut S,
) -> usize {
    for primitive in shape {
        sink.primitive(placement.apply(primitive, ctx));
    }
    shape.len()
}
