// Copyright 2025 ReductSoftware UG
// This Source Code Form is subject to the terms of the Mozilla Public
//    License, v. 2.0. If a copy of the MPL was not distributed with this
//    file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod resource_path;
mod wire_value;

pub(crate) use resource_path::ResourcePathParser;
pub(crate) use wire_value::WireValueParser;
