// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod checkout;
pub mod credentials;
pub mod price;
pub mod purchase;
