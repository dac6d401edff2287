//! Forward pass: lit meshes and the star points into the HDR target.

use super::helpers::{uniform_entry, DEPTH_FORMAT, HDR_FORMAT};
use fnv::FnvHashMap;
use glam::{Mat4, Vec3};
use portfolio_core::scene::{Geometry, Light, Mesh, SceneNode};
use portfolio_core::{Camera, NodeId, Scene};
use wgpu::util::DeviceExt;

pub(crate) const MAX_POINT_LIGHTS: usize = 8;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Globals {
    view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    fog_color: [f32; 4],
    ambient: [f32; 4],
    sun_dir: [f32; 4],
    sun_color: [f32; 4],
    point_pos: [[f32; 4]; MAX_POINT_LIGHTS],
    point_color: [[f32; 4]; MAX_POINT_LIGHTS],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ObjectUniforms {
    model: [[f32; 4]; 4],
    color: [f32; 4],
    emissive: [f32; 4],
    material: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Vertex {
    position: [f32; 3],
    normal: [f32; 3],
}

fn scaled(rgb: [f32; 3], k: f32, w: f32) -> [f32; 4] {
    [rgb[0] * k, rgb[1] * k, rgb[2] * k, w]
}

/// Pack camera, fog and the scene's lights. Point lights past
/// `MAX_POINT_LIGHTS` are dropped.
pub(crate) fn pack_globals(scene: &Scene, camera: &Camera) -> Globals {
    let atmo = scene.atmosphere;
    let mut g = Globals {
        view_proj: camera.view_proj().to_cols_array_2d(),
        camera_pos: camera.eye.extend(atmo.fog_density).to_array(),
        fog_color: scaled(atmo.fog_color, 1.0, 0.0),
        ambient: [0.0; 4],
        sun_dir: [0.0, 1.0, 0.0, 0.0],
        sun_color: [0.0; 4],
        point_pos: [[0.0; 4]; MAX_POINT_LIGHTS],
        point_color: [[0.0; 4]; MAX_POINT_LIGHTS],
    };
    let mut points = 0;
    for light in &scene.lights {
        match *light {
            Light::Ambient { color, intensity } => {
                for c in 0..3 {
                    g.ambient[c] += color[c] * intensity;
                }
            }
            Light::Directional {
                position,
                color,
                intensity,
            } => {
                // Shines from `position` towards the origin.
                let dir = position.normalize_or_zero();
                let dir = if dir == Vec3::ZERO { Vec3::Y } else { dir };
                g.sun_dir = dir.extend(0.0).to_array();
                g.sun_color = scaled(color, intensity, 0.0);
            }
            Light::Point {
                position,
                color,
                intensity,
                range,
            } => {
                if points == MAX_POINT_LIGHTS {
                    log::warn!("[render] point light limit reached, extra lights ignored");
                    continue;
                }
                g.point_pos[points] = position.extend(range).to_array();
                g.point_color[points] = scaled(color, intensity, 0.0);
                points += 1;
            }
        }
    }
    g.fog_color[3] = points as f32;
    g
}

pub(crate) fn pack_object(node: &SceneNode) -> ObjectUniforms {
    let m = node.material;
    let model: Mat4 = node.transform.matrix();
    ObjectUniforms {
        model: model.to_cols_array_2d(),
        color: scaled(m.color, 1.0, m.opacity),
        emissive: scaled(node.emissive_radiance(), 1.0, 0.0),
        material: [m.metalness, m.roughness, 0.0, 0.0],
    }
}

fn mesh_vertices(mesh: &Mesh) -> Vec<Vertex> {
    mesh.positions
        .iter()
        .zip(&mesh.normals)
        .map(|(p, n)| Vertex {
            position: p.to_array(),
            normal: n.to_array(),
        })
        .collect()
}

struct GpuObject {
    uniforms: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

struct GpuMesh {
    object: GpuObject,
    vertices: wgpu::Buffer,
    indices: wgpu::Buffer,
    index_count: u32,
    revision: u32,
}

struct GpuPoints {
    object: GpuObject,
    vertices: wgpu::Buffer,
    count: u32,
}

pub(crate) struct ScenePass {
    globals: wgpu::Buffer,
    globals_bg: wgpu::BindGroup,
    object_bgl: wgpu::BindGroupLayout,
    mesh_pipeline: wgpu::RenderPipeline,
    points_pipeline: wgpu::RenderPipeline,
    meshes: FnvHashMap<NodeId, GpuMesh>,
    points: FnvHashMap<NodeId, GpuPoints>,
}

impl ScenePass {
    pub(crate) fn new(device: &wgpu::Device, scene: &Scene) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::SCENE_WGSL.into()),
        });
        let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[uniform_entry(
                0,
                wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            )],
        });
        let object_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("object_bgl"),
            entries: &[uniform_entry(
                0,
                wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            )],
        });
        let globals = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals.as_entire_binding(),
            }],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&globals_bgl, &object_bgl],
            push_constant_ranges: &[],
        });

        let mesh_attrs = wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
        let mesh_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("mesh_pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_mesh"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<Vertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &mesh_attrs,
                }],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                // Mountains and the floor are open sheets seen from both sides.
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_mesh"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: HDR_FORMAT,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let point_attrs = wgpu::vertex_attr_array![0 => Float32x3];
        let points_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("points_pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_points"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<[f32; 3]>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &point_attrs,
                }],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::PointList,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: false,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_points"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: HDR_FORMAT,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let mut pass = Self {
            globals,
            globals_bg,
            object_bgl,
            mesh_pipeline,
            points_pipeline,
            meshes: FnvHashMap::default(),
            points: FnvHashMap::default(),
        };
        pass.upload_all(device, scene);
        pass
    }

    fn create_object(&self, device: &wgpu::Device, node: &SceneNode) -> GpuObject {
        let uniforms = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(node.name),
            contents: bytemuck::bytes_of(&pack_object(node)),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(node.name),
            layout: &self.object_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniforms.as_entire_binding(),
            }],
        });
        GpuObject {
            uniforms,
            bind_group,
        }
    }

    fn upload_all(&mut self, device: &wgpu::Device, scene: &Scene) {
        for (id, node) in scene.iter() {
            let object = self.create_object(device, node);
            match &node.geometry {
                Geometry::Mesh(mesh) => {
                    let vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                        label: Some("mesh_vertices"),
                        contents: bytemuck::cast_slice(&mesh_vertices(mesh)),
                        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                    });
                    let indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                        label: Some("mesh_indices"),
                        contents: bytemuck::cast_slice(&mesh.indices),
                        usage: wgpu::BufferUsages::INDEX,
                    });
                    self.meshes.insert(
                        id,
                        GpuMesh {
                            object,
                            vertices,
                            indices,
                            index_count: mesh.indices.len() as u32,
                            revision: mesh.revision,
                        },
                    );
                }
                Geometry::Points(points) => {
                    let data: Vec<[f32; 3]> = points.iter().map(|p| p.to_array()).collect();
                    let vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                        label: Some("points_vertices"),
                        contents: bytemuck::cast_slice(&data),
                        usage: wgpu::BufferUsages::VERTEX,
                    });
                    self.points.insert(
                        id,
                        GpuPoints {
                            object,
                            vertices,
                            count: points.len() as u32,
                        },
                    );
                }
            }
        }
        log::info!(
            "[render] uploaded meshes={} point_sets={}",
            self.meshes.len(),
            self.points.len()
        );
    }

    /// Queue per-frame uniforms and re-upload meshes whose revision moved.
    pub(crate) fn prepare(&mut self, queue: &wgpu::Queue, scene: &Scene, camera: &Camera) {
        queue.write_buffer(&self.globals, 0, bytemuck::bytes_of(&pack_globals(scene, camera)));
        for (id, node) in scene.iter() {
            if let Some(gpu) = self.meshes.get_mut(&id) {
                queue.write_buffer(&gpu.object.uniforms, 0, bytemuck::bytes_of(&pack_object(node)));
                if let Some(mesh) = node.mesh() {
                    if mesh.revision != gpu.revision {
                        queue.write_buffer(&gpu.vertices, 0, bytemuck::cast_slice(&mesh_vertices(mesh)));
                        gpu.revision = mesh.revision;
                    }
                }
            } else if let Some(gpu) = self.points.get(&id) {
                queue.write_buffer(&gpu.object.uniforms, 0, bytemuck::bytes_of(&pack_object(node)));
            }
        }
    }

    pub(crate) fn draw(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        scene: &Scene,
        color: &wgpu::TextureView,
        depth: &wgpu::TextureView,
    ) {
        let [r, g, b] = scene.atmosphere.background;
        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("scene_pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: color,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: r as f64,
                        g: g as f64,
                        b: b as f64,
                        a: 1.0,
                    }),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: depth,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        rpass.set_bind_group(0, &self.globals_bg, &[]);

        rpass.set_pipeline(&self.mesh_pipeline);
        for (id, _) in scene.iter() {
            let Some(gpu) = self.meshes.get(&id) else {
                continue;
            };
            rpass.set_bind_group(1, &gpu.object.bind_group, &[]);
            rpass.set_vertex_buffer(0, gpu.vertices.slice(..));
            rpass.set_index_buffer(gpu.indices.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..gpu.index_count, 0, 0..1);
        }

        rpass.set_pipeline(&self.points_pipeline);
        for gpu in self.points.values() {
            rpass.set_bind_group(1, &gpu.object.bind_group, &[]);
            rpass.set_vertex_buffer(0, gpu.vertices.slice(..));
            rpass.draw(0..gpu.count, 0..1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::build_scene;
    use portfolio_core::scene::color::srgb_hex;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scene() -> Scene {
        build_scene(&mut StdRng::seed_from_u64(42))
    }

    #[test]
    fn globals_pack_every_light() {
        let scene = scene();
        let g = pack_globals(&scene, &Camera::default());
        // One purple light plus five random accents.
        assert_eq!(g.fog_color[3], 6.0);
        assert!((g.ambient[0] - 0.2).abs() < 1e-6);
        let sky = srgb_hex(0x0f172a);
        assert_eq!(&g.fog_color[..3], &sky[..]);
        assert_eq!(g.camera_pos[3], scene.atmosphere.fog_density);
    }

    #[test]
    fn uniform_layouts_are_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<Globals>() % 16, 0);
        assert_eq!(std::mem::size_of::<ObjectUniforms>() % 16, 0);
    }

    #[test]
    fn hovered_object_packs_brighter_emissive() {
        let mut scene = scene();
        let id = scene.interactive()[0];
        let idle = pack_object(scene.node(id)).emissive;
        scene.set_hover(Some(id));
        let lit = pack_object(scene.node(id)).emissive;
        assert!(lit[0] > idle[0]);
    }
}
