// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod summary;
pub mod profile;
pub mod assets;
pub mod expenses;
pub mod projection;
pub mod exporter;
