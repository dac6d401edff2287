//! Bloom chain: bright pass, separable blur, composite to the surface.

use super::helpers::{self, sampler_entry, texture_entry, uniform_entry, HDR_FORMAT};
use super::targets::RenderTargets;

const BLOOM_THRESHOLD: f32 = 0.8;
const BLOOM_STRENGTH: f32 = 0.7;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PostUniforms {
    texel: [f32; 2],
    blur_dir: [f32; 2],
    threshold: f32,
    bloom_strength: f32,
    _pad: [f32; 2],
}

pub(crate) struct PostResources {
    bgl0: wgpu::BindGroupLayout, // tex+sampler+uniform
    bgl1: wgpu::BindGroupLayout, // tex+sampler
    sampler: wgpu::Sampler,
    // One buffer per pass direction; queued writes land before submit.
    u_main: wgpu::Buffer,
    u_blur_h: wgpu::Buffer,
    u_blur_v: wgpu::Buffer,
    bright_pipeline: wgpu::RenderPipeline,
    blur_pipeline: wgpu::RenderPipeline,
    composite_pipeline: wgpu::RenderPipeline,
}

/// Bind groups that reference the size-dependent targets.
pub(crate) struct PostBindGroups {
    hdr: wgpu::BindGroup,
    from_bloom_a: wgpu::BindGroup,
    from_bloom_b: wgpu::BindGroup,
    bloom_a_only: wgpu::BindGroup,
}

impl PostResources {
    pub(crate) fn new(device: &wgpu::Device, swap_format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::POST_WGSL.into()),
        });
        let bgl0 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("post_bgl0"),
            entries: &[
                texture_entry(0),
                sampler_entry(1),
                uniform_entry(2, wgpu::ShaderStages::FRAGMENT),
            ],
        });
        let bgl1 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("post_bgl1"),
            entries: &[texture_entry(0), sampler_entry(1)],
        });
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let uniform = |label| {
            device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(label),
                size: std::mem::size_of::<PostUniforms>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        };
        let pl_single = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl_post_0"),
            bind_group_layouts: &[&bgl0],
            push_constant_ranges: &[],
        });
        let pl_composite = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl_post_comp"),
            bind_group_layouts: &[&bgl0, &bgl1],
            push_constant_ranges: &[],
        });
        let bright_pipeline =
            helpers::make_post_pipeline(device, &pl_single, &shader, "fs_bright", HDR_FORMAT, None);
        let blur_pipeline =
            helpers::make_post_pipeline(device, &pl_single, &shader, "fs_blur", HDR_FORMAT, None);
        let composite_pipeline = helpers::make_post_pipeline(
            device,
            &pl_composite,
            &shader,
            "fs_composite",
            swap_format,
            Some(wgpu::BlendState::REPLACE),
        );
        Self {
            u_main: uniform("post_uniforms_main"),
            u_blur_h: uniform("post_uniforms_blur_h"),
            u_blur_v: uniform("post_uniforms_blur_v"),
            bgl0,
            bgl1,
            sampler,
            bright_pipeline,
            blur_pipeline,
            composite_pipeline,
        }
    }

    pub(crate) fn bind_groups(&self, device: &wgpu::Device, targets: &RenderTargets) -> PostBindGroups {
        let with_uniforms = |label, view: &wgpu::TextureView, buf: &wgpu::Buffer| {
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(label),
                layout: &self.bgl0,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(&self.sampler),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: buf.as_entire_binding(),
                    },
                ],
            })
        };
        let bloom_a_only = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg_bloom_a_only"),
            layout: &self.bgl1,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&targets.bloom_a_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
            ],
        });
        PostBindGroups {
            hdr: with_uniforms("bg_hdr", &targets.hdr_view, &self.u_main),
            from_bloom_a: with_uniforms("bg_from_bloom_a", &targets.bloom_a_view, &self.u_blur_h),
            from_bloom_b: with_uniforms("bg_from_bloom_b", &targets.bloom_b_view, &self.u_blur_v),
            bloom_a_only,
        }
    }

    /// Refresh per-pass uniforms for a bloom resolution of `bloom_size`.
    pub(crate) fn write_uniforms(&self, queue: &wgpu::Queue, bloom_size: [f32; 2]) {
        let base = PostUniforms {
            texel: [1.0 / bloom_size[0].max(1.0), 1.0 / bloom_size[1].max(1.0)],
            blur_dir: [0.0, 0.0],
            threshold: BLOOM_THRESHOLD,
            bloom_strength: BLOOM_STRENGTH,
            _pad: [0.0; 2],
        };
        queue.write_buffer(&self.u_main, 0, bytemuck::bytes_of(&base));
        let h = PostUniforms {
            blur_dir: [1.0, 0.0],
            ..base
        };
        queue.write_buffer(&self.u_blur_h, 0, bytemuck::bytes_of(&h));
        let v = PostUniforms {
            blur_dir: [0.0, 1.0],
            ..base
        };
        queue.write_buffer(&self.u_blur_v, 0, bytemuck::bytes_of(&v));
    }

    /// Bright pass → blur H → blur V → composite onto `surface_view`.
    pub(crate) fn run(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        targets: &RenderTargets,
        groups: &PostBindGroups,
        surface_view: &wgpu::TextureView,
    ) {
        blit(
            encoder,
            "bright_pass",
            &targets.bloom_a_view,
            &self.bright_pipeline,
            &groups.hdr,
            None,
        );
        blit(
            encoder,
            "blur_h",
            &targets.bloom_b_view,
            &self.blur_pipeline,
            &groups.from_bloom_a,
            None,
        );
        blit(
            encoder,
            "blur_v",
            &targets.bloom_a_view,
            &self.blur_pipeline,
            &groups.from_bloom_b,
            None,
        );
        blit(
            encoder,
            "composite",
            surface_view,
            &self.composite_pipeline,
            &groups.hdr,
            Some(&groups.bloom_a_only),
        );
    }
}

fn blit(
    encoder: &mut wgpu::CommandEncoder,
    label: &str,
    target: &wgpu::TextureView,
    pipeline: &wgpu::RenderPipeline,
    bg0: &wgpu::BindGroup,
    bg1: Option<&wgpu::BindGroup>,
) {
    let mut r = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    r.set_pipeline(pipeline);
    r.set_bind_group(0, bg0, &[]);
    if let Some(g1) = bg1 {
        r.set_bind_group(1, g1, &[]);
    }
    r.draw(0..3, 0..1);
}
