use crate::drag::PointerId;
use crate::posbox::Posbox;
use crate::{Color, RenderMode};

#[derive(Clone, Debug, PartialEq)]
pub enum ControllerMessage {
	PointerDown(PointerId, [f64; 2]),
	PointerMove(PointerId, [f64; 2]),
	PointerUp(PointerId),
	// same as up, the platform gave up on the gesture
	PointerCancel(PointerId),
	SetNumNodes(usize),
	SetRadius(f64),
	SetBindingElasticity(f64),
	SetPinningElasticity(f64),
	SetDampingFactor(f64),
	SetGravity([f64; 2]),
	// raw accelerometer reading, scaled and flipped into screen space
	SetAccelerometer([f64; 2]),
	SetGravityEnabled(bool),
	SetPinned(bool),
	SetDragRadius(f64),
	SetDragFalloff(bool),
	SetRenderMode(RenderMode),
	SetFillColor(Color),
	SetBackgroundColor(Color),
	SetBoundingRect(Posbox),
	Refresh,
}
