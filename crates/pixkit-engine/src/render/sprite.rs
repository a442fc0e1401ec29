use core::ops::Range;

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::device::TextureId;
use crate::render::{RenderCtx, RenderTarget, TextureStore};
use crate::scene::{Sprite, SpriteList};

use super::common::{
    globals_min_binding_size, premul_alpha_blend, GlobalsUniform, QuadVertex, QUAD_INDICES,
    QUAD_VERTICES,
};

/// Instanced renderer for a [`SpriteList`].
///
/// Sprites are drawn in the list's paint order. Consecutive sprites sharing a
/// texture go out in one instanced draw call, so primitives (which all use the
/// shared pixel) batch into very few calls.
#[derive(Default)]
pub struct SpriteRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    globals_layout: Option<wgpu::BindGroupLayout>,
    globals_bind_group: Option<wgpu::BindGroup>,
    globals_ubo: Option<wgpu::Buffer>,

    quad_vbo: Option<wgpu::Buffer>,
    quad_ibo: Option<wgpu::Buffer>,

    instance_vbo: Option<wgpu::Buffer>,
    instance_capacity: usize,

    warned_unknown_texture: bool,
}

impl SpriteRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders `sprites` into `target`, loading (not clearing) existing contents.
    ///
    /// Sprites referencing a texture unknown to `textures` are skipped
    /// (one-time warning).
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        textures: &TextureStore,
        sprites: &mut SpriteList,
    ) {
        let (instances, batches, skipped) =
            build_batches(sprites, |id| textures.size(id));

        if skipped > 0 && !self.warned_unknown_texture {
            log::warn!("SpriteRenderer: skipped {skipped} sprite(s) with unknown textures");
            self.warned_unknown_texture = true;
        }
        if instances.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx, textures);
        self.ensure_static_buffers(ctx);
        self.ensure_bindings(ctx);

        // Mutating methods must happen before borrowing pipeline/buffers immutably.
        self.write_globals(ctx);
        self.ensure_instance_capacity(ctx, instances.len());

        let Some(instance_vbo) = self.instance_vbo.as_ref() else { return };
        ctx.queue.write_buffer(instance_vbo, 0, bytemuck::cast_slice(&instances));

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(globals) = self.globals_bind_group.as_ref() else { return };
        let Some(quad_vbo) = self.quad_vbo.as_ref() else { return };
        let Some(quad_ibo) = self.quad_ibo.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("pixkit sprite pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, globals, &[]);
        rpass.set_vertex_buffer(0, quad_vbo.slice(..));
        rpass.set_vertex_buffer(1, instance_vbo.slice(..));
        rpass.set_index_buffer(quad_ibo.slice(..), wgpu::IndexFormat::Uint16);

        for batch in &batches {
            let Some(texture) = textures.bind_group(batch.texture) else { continue };
            rpass.set_bind_group(1, texture, &[]);
            rpass.draw_indexed(0..6, 0, batch.instances.clone());
        }
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>, textures: &TextureStore) {
        if self.pipeline_format == Some(ctx.target_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("pixkit sprite shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/sprite.wgsl").into()),
        });

        let globals_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("pixkit sprite globals bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: globals_min_binding_size(),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("pixkit sprite pipeline layout"),
                    bind_group_layouts: &[&globals_layout, textures.layout()],
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("pixkit sprite pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[QuadVertex::layout(), SpriteInstance::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.target_format,
                    blend: Some(premul_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Negative scale and rotation flip winding.
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("SpriteRenderer: built pipeline for {:?}", ctx.target_format);

        self.pipeline_format = Some(ctx.target_format);
        self.pipeline = Some(pipeline);
        self.globals_layout = Some(globals_layout);

        self.globals_bind_group = None;
        self.globals_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.globals_bind_group.is_some() && self.globals_ubo.is_some() {
            return;
        }
        let Some(layout) = self.globals_layout.as_ref() else { return };

        let ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("pixkit sprite globals ubo"),
            size: std::mem::size_of::<GlobalsUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("pixkit sprite globals bind group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.as_entire_binding(),
            }],
        });

        self.globals_ubo = Some(ubo);
        self.globals_bind_group = Some(bind_group);
    }

    fn ensure_static_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.quad_vbo.is_some() && self.quad_ibo.is_some() {
            return;
        }

        self.quad_vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("pixkit sprite quad vbo"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        }));

        self.quad_ibo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("pixkit sprite quad ibo"),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        }));
    }

    fn write_globals(&mut self, ctx: &RenderCtx<'_>) {
        let Some(ubo) = self.globals_ubo.as_ref() else { return };
        let u = GlobalsUniform::new(ctx.transform, ctx.viewport);
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&u));
    }

    fn ensure_instance_capacity(&mut self, ctx: &RenderCtx<'_>, required_instances: usize) {
        if required_instances <= self.instance_capacity && self.instance_vbo.is_some() {
            return;
        }

        let new_cap = required_instances.next_power_of_two().max(64);
        let new_size = (new_cap * std::mem::size_of::<SpriteInstance>()) as u64;

        self.instance_vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("pixkit sprite instance vbo"),
            size: new_size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.instance_capacity = new_cap;
    }
}

/// A run of instances sharing one texture.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Batch {
    pub texture: TextureId,
    pub instances: Range<u32>,
}

/// Converts `sprites` (in paint order) to GPU instances grouped by texture.
///
/// Returns the instances, the batches, and how many sprites were skipped because
/// `texture_size` did not know their texture.
pub(crate) fn build_batches(
    sprites: &mut SpriteList,
    texture_size: impl Fn(TextureId) -> Option<(u32, u32)>,
) -> (Vec<SpriteInstance>, Vec<Batch>, usize) {
    let mut instances = Vec::with_capacity(sprites.len());
    let mut batches: Vec<Batch> = Vec::new();
    let mut skipped = 0usize;

    for item in sprites.iter_in_paint_order() {
        let sprite = &item.sprite;
        let Some(size) = texture_size(sprite.texture) else {
            skipped += 1;
            continue;
        };

        let index = instances.len() as u32;
        instances.push(SpriteInstance::new(sprite, size));

        match batches.last_mut() {
            Some(last) if last.texture == sprite.texture => last.instances.end = index + 1,
            _ => batches.push(Batch { texture: sprite.texture, instances: index..index + 1 }),
        }
    }

    (instances, batches, skipped)
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(crate) struct SpriteInstance {
    position: [f32; 2],
    origin: [f32; 2],
    src_size: [f32; 2],
    scale: [f32; 2],
    uv_min: [f32; 2],
    uv_max: [f32; 2],
    color: [f32; 4],
    rotation: f32,
}

impl SpriteInstance {
    const ATTRS: [wgpu::VertexAttribute; 8] = wgpu::vertex_attr_array![
        1 => Float32x2, // position
        2 => Float32x2, // origin
        3 => Float32x2, // src_size
        4 => Float32x2, // scale
        5 => Float32x2, // uv_min
        6 => Float32x2, // uv_max
        7 => Float32x4, // color
        8 => Float32    // rotation
    ];

    fn new(sprite: &Sprite, (tex_w, tex_h): (u32, u32)) -> Self {
        let (tw, th) = (tex_w.max(1) as f32, tex_h.max(1) as f32);
        let (sx, sy, sw, sh) = match sprite.source {
            Some(src) => (src.x as f32, src.y as f32, src.width as f32, src.height as f32),
            None => (0.0, 0.0, tw, th),
        };

        Self {
            position: [sprite.position.x, sprite.position.y],
            origin: [sprite.origin.x, sprite.origin.y],
            src_size: [sw, sh],
            scale: [sprite.scale.x, sprite.scale.y],
            uv_min: [sx / tw, sy / th],
            uv_max: [(sx + sw) / tw, (sy + sh) / th],
            color: sprite.color.to_premul_f32(),
            rotation: sprite.rotation,
        }
    }

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SpriteInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}
